// Full dashboard page
use crate::application::dashboard_service::DashboardView;
use maud::{DOCTYPE, Markup, PreEscaped, html};

const STYLE: &str = r#"
body{margin:0;font-family:'Segoe UI',sans-serif;background:#0f172a;color:#e2e8f0}
header{display:flex;justify-content:space-between;align-items:center;padding:1.5rem 2rem}
main{display:grid;grid-template-columns:repeat(auto-fit,minmax(420px,1fr));gap:1.5rem;padding:0 2rem 2rem}
.panel{background:#1e293b;border-radius:12px;padding:1.25rem}
.panel header{padding:0 0 .75rem}
.meta{color:#94a3b8;font-size:.85rem}
#kpiGrid{display:grid;grid-template-columns:repeat(auto-fit,minmax(180px,1fr));gap:1rem;padding:0 2rem 1.5rem}
.kpi-card{background:#1e293b;border-radius:12px;padding:1rem}
.kpi-card h3{margin:.5rem 0;font-size:.9rem;color:#94a3b8}
.kpi-trend.up{color:#22c55e}.kpi-trend.down{color:#ef4444}
.activity__item{display:flex;justify-content:space-between;padding:.4rem 0}
table{width:100%;border-collapse:collapse}td{padding:.5rem 0}
.badge{padding:.15rem .6rem;border-radius:999px;font-size:.75rem}
.badge.good{background:#14532d}.badge.warning{background:#713f12}.badge.risk{background:#7f1d1d}
"#;

// Applies every published view, whether it came from a POST or the event stream.
const SCRIPT: &str = r#"
const slots={kpiGrid:'kpi_cards',revenueChartSlot:'revenue_chart',revenueMeta:'revenue_meta',
productChartSlot:'product_chart',mixMeta:'mix_meta',activityFeed:'activity_items',
activityMeta:'activity_meta',customerRows:'customer_rows'};
function apply(view){
  for(const [id,key] of Object.entries(slots)){document.getElementById(id).innerHTML=view[key];}
  document.getElementById('rangeFilter').value=String(view.range);
}
async function post(url){const r=await fetch(url,{method:'POST'});if(r.ok)apply(await r.json());}
document.getElementById('rangeFilter').addEventListener('change',e=>post('/dashboard/range?days='+e.target.value));
document.getElementById('refreshButton').addEventListener('click',()=>post('/dashboard/refresh'));
new EventSource('/dashboard/stream').addEventListener('dashboard',e=>apply(JSON.parse(e.data)));
"#;

pub fn render_page(view: &DashboardView, ranges: &[u32]) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { "Business Dashboard" }
                style { (PreEscaped(STYLE)) }
            }
            body {
                header {
                    h1 { "Business Dashboard" }
                    div {
                        label for="rangeFilter" { "Range " }
                        select id="rangeFilter" {
                            @for &days in ranges {
                                option value=(days) selected[days == view.range] { "Last " (days) " days" }
                            }
                        }
                        " "
                        button id="refreshButton" type="button" { "Refresh" }
                    }
                }
                section id="kpiGrid" { (PreEscaped(&view.kpi_cards)) }
                main {
                    article class="panel" {
                        header {
                            h2 { "Revenue trend" }
                            span id="revenueMeta" class="meta" { (view.revenue_meta) }
                        }
                        div id="revenueChartSlot" { (PreEscaped(&view.revenue_chart)) }
                    }
                    article class="panel" {
                        header {
                            h2 { "Product mix" }
                            span id="mixMeta" class="meta" { (view.mix_meta) }
                        }
                        div id="productChartSlot" { (PreEscaped(&view.product_chart)) }
                    }
                    article class="panel" {
                        header {
                            h2 { "Activity" }
                            span id="activityMeta" class="meta" { (view.activity_meta) }
                        }
                        ol id="activityFeed" class="activity" { (PreEscaped(&view.activity_items)) }
                    }
                    article class="panel" {
                        header { h2 { "Top customers" } }
                        table id="customerTable" {
                            thead { tr { th { "Account" } th { "Value" } th { "Health" } } }
                            tbody id="customerRows" { (PreEscaped(&view.customer_rows)) }
                        }
                    }
                }
                script { (PreEscaped(SCRIPT)) }
            }
        }
    }
}
