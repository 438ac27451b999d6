//
//  opsmngr-client
//  api/response.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/15.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Response metadata returned next to every decoded value.
//!
//! [`Response`] keeps the status, headers and final URL of the HTTP
//! exchange. Resource services copy the envelope's `links` onto
//! [`Response::links`] after a successful decode; the client itself never
//! fills them in. When raw capture is enabled the unparsed body is kept in
//! [`Response::raw`].

use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use url::Url;

use super::common::{find_link, ApiError, Link};
use super::transport::RawResponse;

#[derive(Debug, Clone)]
pub struct Response {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub url: Url,
    /// Pagination relations copied from the decoded envelope.
    pub links: Vec<Link>,
    /// Unparsed body, only populated in raw-capture mode.
    pub raw: Option<Vec<u8>>,
}

impl Response {
    pub(crate) fn from_raw(raw: &RawResponse) -> Self {
        Self {
            status: raw.status,
            headers: raw.headers.clone(),
            url: raw.url.clone(),
            links: Vec::new(),
            raw: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Returns the page number encoded in the `self` link.
    ///
    /// # Errors
    ///
    /// - [`ApiError::MissingSelfLink`] if no `self` relation exists
    /// - [`ApiError::InvalidUrl`] if its href cannot be parsed
    /// - [`ApiError::InvalidPage`] if `pageNum` is missing or not a number
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use opsmngr::api::Response;
    /// # fn example(response: &Response) -> Result<(), opsmngr::api::ApiError> {
    /// let page = response.current_page()?;
    /// println!("on page {}", page);
    /// # Ok(())
    /// # }
    /// ```
    pub fn current_page(&self) -> Result<u32, ApiError> {
        let link = find_link(&self.links, "self").ok_or(ApiError::MissingSelfLink)?;
        let href = Url::parse(&link.href)?;
        let page = href
            .query_pairs()
            .find(|(key, _)| key == "pageNum")
            .map(|(_, value)| value.into_owned())
            .ok_or_else(|| ApiError::InvalidPage("pageNum is missing from the self link".to_string()))?;

        page.parse::<u32>()
            .map_err(|e| ApiError::InvalidPage(format!("{page:?}: {e}")))
    }
}
