//! HTTP plumbing shared by every resource module.
//!
//! JSON traffic goes through `gloo_net`; multipart bodies go through the
//! browser fetch API directly so the boundary header is set by the browser.
//! Everything returns `Result<_, String>` for the pages to surface.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::JsCast;
use web_sys::{FormData, RequestInit, RequestMode, Response};

/// Remote API origin. The one place to change when the deployment moves.
const API_ORIGIN: &str = "https://middleeastseven.runasp.net/api";

/// Build a full API URL from a resource path like `/Categories/3`.
pub fn api_url(path: &str) -> String {
    format!("{}{}", API_ORIGIN, path)
}

/// GET a JSON value.
pub async fn fetch_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = Request::get(&api_url(path))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// POST or PUT a JSON body; the response body is not used.
pub async fn send_json<B: Serialize>(method: &str, path: &str, body: &B) -> Result<(), String> {
    let builder = match method {
        "POST" => Request::post(&api_url(path)),
        _ => Request::put(&api_url(path)),
    };

    let response = builder
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    Ok(())
}

/// DELETE a record.
pub async fn send_delete(path: &str) -> Result<(), String> {
    let response = Request::delete(&api_url(path))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    Ok(())
}

/// Assemble a multipart body from text parts and an optional image file part.
pub fn multipart(
    fields: Vec<(&'static str, String)>,
    image: Option<&web_sys::File>,
) -> Result<FormData, String> {
    let form = FormData::new().map_err(|e| format!("{e:?}"))?;
    for (name, value) in fields {
        form.append_with_str(name, &value)
            .map_err(|e| format!("{e:?}"))?;
    }
    if let Some(file) = image {
        form.append_with_blob("image", file)
            .map_err(|e| format!("{e:?}"))?;
    }
    Ok(form)
}

/// POST or PUT a multipart body.
pub async fn send_form(method: &str, path: &str, form: FormData) -> Result<(), String> {
    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&form);

    let request =
        web_sys::Request::new_with_str_and_init(&api_url(path), &opts).map_err(|e| format!("{e:?}"))?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;

    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }

    Ok(())
}
