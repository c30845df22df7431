use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;

use crate::table::ProjectedRecord;

use super::text::RELEGATION_SPOTS;

/// Render the standings and write them as a self-contained HTML page.
///
/// One open-write-close; a failed write surfaces as an error and aborts the
/// run.
pub fn write_report(standings: &[ProjectedRecord], path: &Path) -> Result<()> {
    fs::write(path, render(standings))
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

/// Render the standings into the embedded page template. Rows in the
/// relegation zone carry the `relegated` class; numbers are rounded for
/// display only.
pub fn render(standings: &[ProjectedRecord]) -> String {
    let relegation_start = standings.len().saturating_sub(RELEGATION_SPOTS);

    let mut rows = String::new();
    for (idx, row) in standings.iter().enumerate() {
        let class = if idx >= relegation_start {
            "relegated"
        } else {
            ""
        };
        let _ = writeln!(
            rows,
            "        <tr class='{}'><td>{}</td><td>{}</td><td>{:.0}</td><td>{:.0}</td>\
             <td>{}</td><td>{}</td><td>{:.0}</td><td>{:.0}</td><td>{:.0}</td></tr>",
            class,
            idx + 1,
            row.current.team,
            row.final_points,
            row.final_wins,
            row.current.points,
            row.current.played,
            row.final_goals_for,
            row.final_goals_against,
            row.final_goal_diff,
        );
    }

    REPORT_HTML
        .replace("{{ROWS}}", rows.trim_end())
        .replace(
            "{{GENERATED_AT}}",
            &Utc::now().format("%d/%m/%Y %H:%M UTC").to_string(),
        )
}

/// Embedded single-file report page (HTML + CSS).
const REPORT_HTML: &str = r#"<!doctype html>
<html lang="pt-br">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>Projeção Brasileirão</title>
  <style>
    :root { --bg:#ffffff; --fg:#1b1f23; --muted:#6a737d; --line:#eaecef; --zebra:#fafbfc; --accent:#0366d6; --bad:#b00020; }
    body { font-family: system-ui, -apple-system, Segoe UI, Roboto, Ubuntu, Cantarell, Noto Sans, Arial, sans-serif; background:var(--bg); color:var(--fg); margin:0; padding:32px 16px; }
    h1 { text-align:center; font-size:1.4rem; margin:0 0 16px; }
    .container { max-width: 1000px; margin: 0 auto; }
    table { width:100%; border-collapse: collapse; background:#fff; border:1px solid var(--line); border-radius:8px; overflow:hidden; }
    thead th { background: var(--zebra); text-align:left; font-weight:600; font-size:0.9rem; padding:10px 12px; border-bottom:1px solid var(--line); }
    tbody td { padding:10px 12px; border-bottom:1px solid var(--line); font-size:0.92rem; }
    tbody tr:nth-child(even) { background: var(--zebra); }
    tbody tr.relegated td { color: var(--bad); font-weight:600; }
    .legend { margin-top:10px; color:var(--muted); font-size:0.85rem; }
  </style>
</head>
<body>
  <div class="container">
    <h1>Projeção de Tabela — Brasileirão</h1>
    <table>
      <thead>
        <tr>
          <th>Pos</th>
          <th>Time</th>
          <th>Pts proj</th>
          <th>V proj</th>
          <th>Pts</th>
          <th>J</th>
          <th>GP proj</th>
          <th>GC proj</th>
          <th>SG proj</th>
        </tr>
      </thead>
      <tbody>
{{ROWS}}
      </tbody>
    </table>
    <div class="legend">Linhas em vermelho: zona de rebaixamento (últimas 4 posições). Desempate: vitórias, saldo, gols pró. Gerado em {{GENERATED_AT}}.</div>
  </div>
</body>
</html>
"#;
