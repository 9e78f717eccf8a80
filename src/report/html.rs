//! Standalone HTML for the printable report.

use super::ReportDocument;
use crate::ui::page::Fragment;

const STYLE: &str = "body{font-family:Helvetica,Arial,sans-serif;color:#1f2933;font-size:12px}\
h1{font-size:22px;margin:0 0 4px}h2{font-size:15px;border-bottom:1px solid #cbd2d9;padding-bottom:4px;margin-top:22px}\
table{width:100%;border-collapse:collapse}td,th{border:1px solid #e4e7eb;padding:5px;text-align:left}\
.meta{color:#616e7c}.phase{margin:6px 0}.phase-weeks{font-weight:bold;margin-right:8px}\
.phase-desc{color:#52606d}.totals td:first-child{font-weight:bold}";

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn rows(out: &mut String, fragments: &[Fragment]) {
    for fragment in fragments {
        match fragment {
            Fragment::Row(cells) => {
                out.push_str("<tr>");
                for cell in cells {
                    out.push_str(&format!("<td>{}</td>", escape(cell)));
                }
                out.push_str("</tr>");
            }
            Fragment::Item(text) => {
                out.push_str(&format!("<tr><td>{}</td></tr>", escape(text)));
            }
            Fragment::Phase { .. } => {}
        }
    }
}

pub fn render_document(doc: &ReportDocument) -> String {
    let mut out = String::with_capacity(4096);
    out.push_str(&format!(
        "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>BuildWise Plan</title>\
         <style>{}</style></head><body>",
        STYLE
    ));

    out.push_str(&format!(
        "<h1>BuildWise Construction Plan</h1><p class=\"meta\">{} &middot; {} &middot; {}</p>",
        escape(&doc.date),
        escape(&doc.project_type),
        escape(&doc.area)
    ));

    out.push_str(&format!("<h2>Summary</h2><p>{}</p>", escape(&doc.summary)));

    out.push_str("<h2>Cost Overview</h2><table class=\"totals\">");
    for (label, value) in [
        ("Total Estimated Cost", &doc.total),
        ("Materials", &doc.material_cost),
        ("Labor", &doc.labor_cost),
        ("Duration", &doc.duration),
        ("Workforce", &doc.workers),
    ] {
        out.push_str(&format!("<tr><td>{}</td><td>{}</td></tr>", label, escape(value)));
    }
    out.push_str("</table>");

    out.push_str("<h2>Core Materials</h2><table class=\"totals\">");
    for (label, value) in [
        ("Cement", &doc.cement),
        ("Steel", &doc.steel),
        ("Sand", &doc.sand),
        ("Bricks", &doc.bricks),
    ] {
        out.push_str(&format!("<tr><td>{}</td><td>{}</td></tr>", label, escape(value)));
    }
    out.push_str("</table>");

    out.push_str("<h2>Material Costs</h2><table><tr><th>Item</th><th>Cost</th></tr>");
    rows(&mut out, &doc.material_rows);
    out.push_str("</table>");

    out.push_str(
        "<h2>Labor</h2><table><tr><th>Type</th><th>Workforce</th><th>Duration</th>\
         <th>Daily Wage</th><th>Total</th></tr>",
    );
    rows(&mut out, &doc.labor_rows);
    out.push_str("</table>");

    out.push_str("<h2>Timeline</h2>");
    for fragment in &doc.timeline {
        if let Fragment::Phase {
            weeks,
            name,
            description,
        } = fragment
        {
            out.push_str(&format!(
                "<div class=\"phase\"><span class=\"phase-weeks\">{}</span><strong>{}</strong>\
                 <div class=\"phase-desc\">{}</div></div>",
                escape(weeks),
                escape(name),
                escape(description)
            ));
        }
    }

    out.push_str("</body></html>");
    out
}
