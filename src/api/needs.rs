//! Need Detail

use helpbridge_core::needs::NeedId;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use super::send_json;
use crate::config::AppConfig;
use crate::error::ApiResult;
use crate::models::NeedDetail;

fn need_detail_url(config: &AppConfig, id: &NeedId) -> String {
    let segment = id.to_string();
    config.endpoint(&format!("needs/{}", utf8_percent_encode(&segment, NON_ALPHANUMERIC)))
}

pub async fn fetch_need_detail(config: &AppConfig, id: &NeedId) -> ApiResult<NeedDetail> {
    let url = need_detail_url(config, id);
    log::debug!("[Needs] GET {}", url);
    send_json(reqwest::Client::new().get(url)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_url_encodes_id() {
        let config = AppConfig::from_sources(Some("http://api.test"), None, None);
        assert_eq!(need_detail_url(&config, &NeedId::Number(12)), "http://api.test/needs/12");
        assert_eq!(
            need_detail_url(&config, &NeedId::from("a/b c")),
            "http://api.test/needs/a%2Fb%20c"
        );
    }
}
