#![cfg(target_arch = "wasm32")]

use maisonnoir_landing::i18n;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::js_sys;

wasm_bindgen_test_configure!(run_in_browser);

const TABLE: &str = r#"{
    "en": { "dir": "ltr", "strings": { "hero_title": "Timeless interiors", "cta": "Book a visit" } },
    "fr": { "dir": "ltr", "strings": { "hero_title": "Intérieurs intemporels" } }
}"#;

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

fn inject_table(json: &str) {
    let value = js_sys::JSON::parse(json).unwrap();
    let window = web_sys::window().unwrap();
    js_sys::Reflect::set(&window, &"I18N_CONTENT".into(), &value).unwrap();
}

fn clear_table() {
    let window = web_sys::window().unwrap();
    js_sys::Reflect::set(&window, &"I18N_CONTENT".into(), &JsValue::UNDEFINED).unwrap();
}

fn mount(html: &str) -> web_sys::Element {
    let document = document();
    let host = document.create_element("div").unwrap();
    host.set_inner_html(html);
    document.body().unwrap().append_child(&host).unwrap();
    host
}

#[wasm_bindgen_test]
fn known_keys_replace_text_and_unknown_keys_keep_placeholders() {
    inject_table(TABLE);
    let document = document();
    let root = document.document_element().unwrap();
    root.set_attribute("lang", "fr").unwrap();
    let host = mount(
        r#"<h1 data-i18n="hero_title">placeholder</h1>
           <p data-i18n="nonexistent_key">untouched</p>"#,
    );

    i18n::apply(&document).unwrap();

    let title = host.query_selector("h1").unwrap().unwrap();
    assert_eq!(title.text_content().unwrap(), "Intérieurs intemporels");
    let skipped = host.query_selector("p").unwrap().unwrap();
    assert_eq!(skipped.text_content().unwrap(), "untouched");

    host.remove();
    clear_table();
}

#[wasm_bindgen_test]
fn attribute_mappings_set_only_resolvable_keys() {
    inject_table(r#"{ "en": { "strings": { "search_hint": "Find a project" } } }"#);
    let document = document();
    let root = document.document_element().unwrap();
    root.set_attribute("lang", "en").unwrap();
    let host = mount(r#"<input data-i18n-attr="placeholder:search_hint, title:missing_key">"#);

    i18n::apply(&document).unwrap();

    let input = host.query_selector("input").unwrap().unwrap();
    assert_eq!(input.get_attribute("placeholder").unwrap(), "Find a project");
    assert!(input.get_attribute("title").is_none());

    host.remove();
    clear_table();
}

#[wasm_bindgen_test]
fn undeclared_language_falls_back_to_english() {
    inject_table(TABLE);
    let document = document();
    let root = document.document_element().unwrap();
    root.set_attribute("lang", "sv").unwrap();
    let host = mount(r#"<h1 data-i18n="cta">placeholder</h1>"#);

    i18n::apply(&document).unwrap();

    let cta = host.query_selector("h1").unwrap().unwrap();
    assert_eq!(cta.text_content().unwrap(), "Book a visit");

    host.remove();
    clear_table();
}

#[wasm_bindgen_test]
fn missing_table_still_applies_the_default_direction() {
    clear_table();
    let document = document();
    let root = document.document_element().unwrap();
    root.set_attribute("lang", "en").unwrap();
    let _ = root.remove_attribute("dir");
    let host = mount(r#"<h1 data-i18n="hero_title">placeholder</h1>"#);

    i18n::apply(&document).unwrap();

    assert_eq!(root.get_attribute("dir").unwrap(), "ltr");
    let title = host.query_selector("h1").unwrap().unwrap();
    assert_eq!(title.text_content().unwrap(), "placeholder");

    host.remove();
}

#[wasm_bindgen_test]
fn rtl_language_flips_the_document_direction() {
    inject_table(r#"{ "ar": { "dir": "rtl", "strings": {} }, "en": { "strings": {} } }"#);
    let document = document();
    let root = document.document_element().unwrap();
    root.set_attribute("lang", "ar").unwrap();

    i18n::apply(&document).unwrap();

    assert_eq!(root.get_attribute("dir").unwrap(), "rtl");

    root.set_attribute("lang", "en").unwrap();
    clear_table();
}
