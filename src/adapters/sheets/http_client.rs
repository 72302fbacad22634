use error_stack::ResultExt;
use google_sheets4::{hyper, hyper_rustls};

use crate::ports::spreadsheet_api::SpreadsheetApiError;

pub type HttpsConnector = hyper_rustls::HttpsConnector<hyper::client::HttpConnector>;

/// HTTPS client trusting the platform's native root certificates.
pub fn http_client() -> error_stack::Result<hyper::Client<HttpsConnector>, SpreadsheetApiError> {
    let connector = hyper_rustls::HttpsConnectorBuilder::new()
        .with_native_roots()
        .change_context(SpreadsheetApiError::FailedToBuildClient)
        .attach_printable("Could not load native root certificates")?
        .https_only()
        .enable_http1()
        .build();

    Ok(hyper::Client::builder().build(connector))
}
