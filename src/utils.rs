use url::Url;

/// Host part of a URL (with port, if any), or an empty string when the URL doesn't parse
pub fn domain_of(url: &str) -> String {
    match Url::parse(url) {
        Ok(parsed) => match (parsed.host_str(), parsed.port()) {
            (Some(host), Some(port)) => format!("{host}:{port}"),
            (Some(host), None) => host.to_string(),
            (None, _) => String::new(),
        },
        Err(_) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_of() {
        assert_eq!(domain_of("https://example.com/page?q=1"), "example.com");
        assert_eq!(domain_of("http://127.0.0.1:8080/"), "127.0.0.1:8080");
        assert_eq!(domain_of("not a url"), "");
    }
}
