//! HTML page output.
//!
//! The thin adapter between the page controller and a document: it reads
//! the controller's state and writes the page a browser would show at that
//! point. All decisions (which cards, which are hidden, which button is
//! active) were already made by the controller.

use crate::page::modal::MODAL_ID;
use crate::page::{Container, PageController};
use crate::render::escape_html;
use crate::scaffold::Scaffold;
use std::error::Error;
use std::fmt::Write;
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument};

/// Serialize the page state into a complete HTML document.
pub fn render_page(scaffold: &Scaffold, page: &PageController) -> String {
    let mut out = String::with_capacity(16 * 1024);

    writeln!(out, "<!DOCTYPE html>").unwrap();
    writeln!(out, "<html lang=\"en\"><head><meta charset=\"utf-8\">").unwrap();
    writeln!(out, "<title>{}</title>", escape_html(&scaffold.title)).unwrap();
    writeln!(
        out,
        "</head><body{}>",
        if page.modal().scroll_locked {
            " style=\"overflow: hidden\""
        } else {
            ""
        }
    )
    .unwrap();

    for banner in &page.modal().banners {
        writeln!(
            out,
            "<div class=\"success-message\">{}</div>",
            escape_html(&banner.message)
        )
        .unwrap();
    }

    writeln!(out, "<header><h1>{}</h1>", escape_html(&scaffold.title)).unwrap();
    writeln!(out, "<button id=\"subscribe-btn\">Subscribe</button></header>").unwrap();

    writeln!(out, "<nav class=\"filters\">").unwrap();
    for button in page.buttons() {
        writeln!(
            out,
            "<button class=\"filter-btn{}\" data-category=\"{}\">{}</button>",
            if button.active { " active" } else { "" },
            escape_html(&button.category),
            escape_html(&button.label)
        )
        .unwrap();
    }
    writeln!(out, "</nav>").unwrap();

    writeln!(
        out,
        "<div id=\"loading\"{}>Loading news...</div>",
        hidden_class(!page.loading_visible())
    )
    .unwrap();

    write!(out, "<div id=\"news-container\">").unwrap();
    match page.container() {
        Container::Empty => {}
        Container::Cards(cards) => {
            for card in cards {
                write!(out, "\n{}", card.to_html()).unwrap();
            }
            out.push('\n');
        }
        Container::Error(message) => {
            write!(out, "<p class=\"error-message\">{}</p>", escape_html(message)).unwrap();
        }
    }
    writeln!(out, "</div>").unwrap();

    writeln!(
        out,
        "<button id=\"load-more-btn\"{}>Load More</button>",
        if page.load_more_visible() {
            ""
        } else {
            " style=\"display: none\""
        }
    )
    .unwrap();

    writeln!(
        out,
        "<div id=\"{MODAL_ID}\" class=\"modal\" style=\"display: {}\"><div class=\"modal-content\">",
        if page.modal().open { "block" } else { "none" }
    )
    .unwrap();
    writeln!(out, "<span class=\"close-btn\">&times;</span>").unwrap();
    writeln!(
        out,
        "<form id=\"subscribe-form\"><input id=\"name\"><input id=\"email\" type=\"email\"><select id=\"frequency\"><option value=\"daily\">Daily</option><option value=\"weekly\">Weekly</option><option value=\"monthly\">Monthly</option></select><button type=\"submit\">Subscribe</button></form>"
    )
    .unwrap();
    writeln!(out, "</div></div>").unwrap();

    writeln!(
        out,
        "<button id=\"scroll-to-top\"{}>&uarr;</button>",
        hidden_class(!page.scroll().button_visible)
    )
    .unwrap();
    writeln!(out, "</body></html>").unwrap();
    out
}

fn hidden_class(hidden: bool) -> &'static str {
    if hidden { " class=\"hidden\"" } else { "" }
}

/// Render and write the page to `path`, creating parent directories.
#[instrument(level = "info", skip_all, fields(%path))]
pub async fn write_page(
    scaffold: &Scaffold,
    page: &PageController,
    path: &str,
) -> Result<(), Box<dyn Error>> {
    let html = render_page(scaffold, page);
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).await?;
        }
    }
    fs::write(path, html).await?;
    info!(cards = page.container().cards().len(), "Wrote news page");
    Ok(())
}
