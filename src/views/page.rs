//! Page shell hosting the three gallery containers, and the scripts the host
//! evaluates to apply render patches.
//!
//! Clicks are delegated from the document: elements carrying `data-tag` or
//! `data-image` post `select_tag` / `select_image` over `window.ipc`, so no
//! identifier is ever spliced into inline JavaScript.

use crate::services::markup::escape_text;
use crate::types::settings::{LayoutSettings, ScrollTrigger};
use crate::types::view::{Container, RenderPatch};

const PAGE_CSS: &str = "body{font-family:-apple-system,BlinkMacSystemFont,\"Segoe UI\",Helvetica,Arial,sans-serif;margin:24px;background:#fafafa;color:#24292f}\
.tag{margin:4px;padding:6px 12px;border:1px solid #d0d7de;border-radius:6px;background:#f6f8fa;cursor:pointer}\
.tag:hover{background:#eaeef2}\
.thumbnail{width:150px;height:150px;margin:4px;cursor:pointer;object-fit:cover}\
#imageArea{margin-top:24px}\
#imageArea img.full{max-width:100%}\
.data{margin:8px 0}\
.error{color:#cf222e}";

const PAGE_JS: &str = r#"
function __gallery_post(m){if(window.ipc)window.ipc.postMessage(JSON.stringify(m));}
document.addEventListener('click',function(e){
  var el=e.target.closest('[data-tag],[data-image]');
  if(!el)return;
  if(el.hasAttribute('data-tag'))__gallery_post({cmd:'select_tag',tag:el.getAttribute('data-tag')});
  else __gallery_post({cmd:'select_image',image:el.getAttribute('data-image')});
});
window.addEventListener('DOMContentLoaded',function(){__gallery_post({cmd:'ui_ready'});});
"#;

/// Complete HTML document with empty containers.
pub fn page_html(title: &str) -> String {
    let mut html = String::with_capacity(PAGE_CSS.len() + PAGE_JS.len() + 512);
    html.push_str("<!DOCTYPE html><html><head><meta charset=\"UTF-8\"><title>");
    html.push_str(&escape_text(title));
    html.push_str("</title><style>");
    html.push_str(PAGE_CSS);
    html.push_str("</style></head><body>");
    for container in Container::ALL {
        html.push_str("<div id=\"");
        html.push_str(container.element_id());
        html.push_str("\"></div>");
    }
    html.push_str("<script>");
    html.push_str(PAGE_JS);
    html.push_str("</script></body></html>");
    html
}

/// JavaScript that replaces the patched container's content and, when asked,
/// scrolls the container's top to the top of the viewport.
pub fn patch_script(patch: &RenderPatch, layout: &LayoutSettings) -> String {
    // A JSON string is a valid JavaScript string literal.
    let html = serde_json::Value::String(patch.html.clone()).to_string();
    let mut js = format!(
        "(function(){{var el=document.getElementById('{}');if(!el)return;el.innerHTML={};",
        patch.container.element_id(),
        html
    );

    if patch.scroll_into_view {
        js.push_str(
            "var go=function(){window.scrollTo({top:el.getBoundingClientRect().top+window.scrollY,behavior:'smooth'});};",
        );
        match layout.scroll_trigger {
            ScrollTrigger::ImageLoad => js.push_str(
                "var img=el.querySelector('img');\
if(img&&!img.complete){img.addEventListener('load',go,{once:true});img.addEventListener('error',go,{once:true});}else{go();}",
            ),
            ScrollTrigger::FixedDelay => {
                js.push_str(&format!("setTimeout(go,{});", layout.scroll_delay_ms))
            }
        }
    }

    js.push_str("})();");
    js
}
