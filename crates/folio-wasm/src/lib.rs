//! WASM bindings for the portfolio builder.
//!
//! The browser form hands its portfolio object straight to [`preview`] for
//! the live preview frame and to [`export_zip`] for the download button.
//! Errors surface as thrown JS errors.

use chrono::NaiveDate;
use folio_codegen::BuildStamp;
use folio_export::{ExportError, Exporter, SiteBundle};
use folio_model::{
    BuiltinCatalog, PortfolioDocument, PurchaseGate, PurchaseStatus, TemplateCatalog,
};
use wasm_bindgen::prelude::*;

/// The page passes the approval it already looked up for the current user.
struct CallerApproval(bool);

impl PurchaseGate for CallerApproval {
    fn status(&self, _template: &str) -> PurchaseStatus {
        if self.0 {
            PurchaseStatus::Approved
        } else {
            PurchaseStatus::NotRequested
        }
    }
}

/// Render the live preview: one HTML page with CSS and JS inlined.
#[wasm_bindgen]
pub fn preview(portfolio: JsValue, template: &str) -> Result<String, JsError> {
    let doc = decode(portfolio)?;
    render_preview(&doc, template, today()?).map_err(to_js_error)
}

/// Build the downloadable ZIP. Returned to JS as a `Uint8Array`.
#[wasm_bindgen(js_name = exportZip)]
pub fn export_zip(
    portfolio: JsValue,
    template: &str,
    purchase_approved: bool,
) -> Result<Vec<u8>, JsError> {
    let doc = decode(portfolio)?;
    let bundle = build_bundle(&doc, template, purchase_approved, today()?).map_err(to_js_error)?;
    Ok(bundle.archive)
}

/// Download name for a portfolio, e.g. `my-cool-portfolio.zip`.
#[wasm_bindgen(js_name = archiveFilename)]
pub fn archive_filename(name: &str) -> String {
    folio_export::archive_filename(name)
}

/// The template catalog as `[{ name, title, description, premium, price }]`.
#[wasm_bindgen]
pub fn templates() -> Result<JsValue, JsError> {
    let list = js_sys::Array::new();
    for template in BuiltinCatalog.templates() {
        let obj = js_sys::Object::new();
        set(&obj, "name", template.name.into())?;
        set(&obj, "title", template.title.into())?;
        set(&obj, "description", template.description.into())?;
        set(&obj, "premium", template.premium.into())?;
        set(&obj, "price", template.price_label().into())?;
        list.push(&obj);
    }
    Ok(list.into())
}

/// Get the generator version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn render_preview(
    doc: &PortfolioDocument,
    template: &str,
    stamp: BuildStamp,
) -> Result<String, ExportError> {
    let gate = CallerApproval(false);
    Exporter::new(&BuiltinCatalog, &gate).preview(doc, template, stamp)
}

fn build_bundle(
    doc: &PortfolioDocument,
    template: &str,
    purchase_approved: bool,
    stamp: BuildStamp,
) -> Result<SiteBundle, ExportError> {
    let gate = CallerApproval(purchase_approved);
    Exporter::new(&BuiltinCatalog, &gate).export(doc, template, stamp)
}

fn decode(value: JsValue) -> Result<PortfolioDocument, JsError> {
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| JsError::new(&format!("Invalid portfolio document: {e}")))
}

fn today() -> Result<BuildStamp, JsError> {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(now.get_full_year() as i32, now.get_month() + 1, now.get_date())
        .map(BuildStamp::new)
        .ok_or_else(|| JsError::new("Failed to read the current date"))
}

fn set(obj: &js_sys::Object, key: &str, value: JsValue) -> Result<(), JsError> {
    js_sys::Reflect::set(obj, &key.into(), &value)
        .map(|_| ())
        .map_err(|_| JsError::new(&format!("Failed to set {key} property")))
}

fn to_js_error(err: ExportError) -> JsError {
    JsError::new(&err.to_string())
}
