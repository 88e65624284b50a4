use crate::inbox::Category;

const API_PREFIX: &str = "/api/public/v1";

pub fn feed_endpoint(category: Category) -> String {
    format!("{API_PREFIX}/{}", category.feed_key())
}

pub fn account_endpoint() -> String {
    format!("{API_PREFIX}/me")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feed_endpoints_use_plural_keys() {
        assert_eq!(feed_endpoint(Category::Mail), "/api/public/v1/mail");
        assert_eq!(feed_endpoint(Category::Letter), "/api/public/v1/letters");
        assert_eq!(feed_endpoint(Category::Package), "/api/public/v1/packages");
        assert_eq!(account_endpoint(), "/api/public/v1/me");
    }
}
