use crate::render::ReportData;

/// Render a self-contained HTML report (data embedded as JSON, figures as
/// inline SVG).
///
/// The template is filled with `replace` rather than `format!()` because the
/// embedded JS uses `${x}` template literals.
pub fn render_html_report(data: &ReportData) -> anyhow::Result<String> {
    // "</" inside a JSON string would end the <script> block early.
    let json = serde_json::to_string(data)?.replace("</", "<\\/");

    const TEMPLATE: &str = r#"<!doctype html>
<html>
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>BFS benchmark results</title>
<style>
  body { font-family: system-ui, -apple-system, Segoe UI, Roboto, Arial, sans-serif; margin: 0; }
  header { padding: 12px 16px; border-bottom: 1px solid #ddd; }
  main { padding: 12px 16px; }
  h1 { font-size: 20px; margin: 0 0 8px 0; }

  .summary { display: flex; gap: 16px; flex-wrap: wrap; font-size: 14px; color: #333; }
  .pill { padding: 4px 8px; border: 1px solid #ddd; border-radius: 999px; background: #fafafa; }

  section { margin-bottom: 24px; }
  .muted { color: #777; font-size: 12px; }
  .figure svg { max-width: 100%; height: auto; }

  table { border-collapse: collapse; margin-top: 8px; }
  th, td { border-bottom: 1px solid #eee; padding: 4px 8px; text-align: left; font-size: 13px; }
  .num { text-align: right; font-variant-numeric: tabular-nums; }
</style>
</head>
<body>
<header>
  <h1 id="title"></h1>
  <div class="summary" id="summary"></div>
</header>

<main id="figures"></main>

<script>
// Embedded report data (JSON object literal)
const DATA = __DATA__;

function escapeHtml(s) {
  return String(s)
    .replaceAll("&", "&amp;")
    .replaceAll("<", "&lt;")
    .replaceAll(">", "&gt;")
    .replaceAll('"', "&quot;")
    .replaceAll("'", "&#39;");
}

function renderSummary() {
  const t = DATA.totals;
  document.getElementById("title").textContent = DATA.title;
  document.getElementById("summary").innerHTML = `
    <span class="pill">rows: <b>${t.rows}</b></span>
    <span class="pill">algorithms: <b>${t.algorithms}</b></span>
    <span class="pill">samples: <b>${t.samples}</b></span>
  `;
}

function renderFigure(fig, idx) {
  const section = document.createElement("section");

  const heading = document.createElement("h2");
  heading.textContent = `${idx + 1}. ${fig.title}`;
  section.appendChild(heading);

  const note = document.createElement("div");
  note.className = "muted";
  note.textContent = fig.show_outliers ? "outliers shown" : "outliers hidden";
  section.appendChild(note);

  const chart = document.createElement("div");
  chart.className = "figure";
  chart.innerHTML = fig.svg;
  section.appendChild(chart);

  const rows = fig.algorithms
    .map((name, i) => `<tr><td>${escapeHtml(name)}</td><td class="num">${fig.samples[i]}</td></tr>`)
    .join("");
  const table = document.createElement("table");
  table.innerHTML = `<thead><tr><th>algorithm</th><th class="num">samples</th></tr></thead><tbody>${rows}</tbody>`;
  section.appendChild(table);

  return section;
}

renderSummary();
const root = document.getElementById("figures");
DATA.figures.forEach((fig, idx) => root.appendChild(renderFigure(fig, idx)));
</script>
</body>
</html>
"#;

    Ok(TEMPLATE.replace("__DATA__", &json))
}
