/// Something a view can display for a word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    pub url: String,
    pub alt_text: String,
}

/// Image lookup collaborator: word term in, displayable image or nothing out
pub trait ImageProvider {
    fn image_for(&self, term: &str) -> Option<ImageRef>;
}

/// No images; views show their placeholder
#[derive(Debug, Default, Clone, Copy)]
pub struct NoImages;

impl ImageProvider for NoImages {
    fn image_for(&self, _term: &str) -> Option<ImageRef> {
        None
    }
}

/// Builds an image URL from a template containing `{query}`
///
/// Nothing is fetched here; the URL is handed to whatever renders it.
#[derive(Debug, Clone)]
pub struct QueryUrlImages {
    url_template: String,
}

impl QueryUrlImages {
    pub fn new(url_template: impl Into<String>) -> Self {
        Self {
            url_template: url_template.into(),
        }
    }
}

impl ImageProvider for QueryUrlImages {
    fn image_for(&self, term: &str) -> Option<ImageRef> {
        let term = term.trim();
        if term.is_empty() {
            return None;
        }
        Some(ImageRef {
            url: self
                .url_template
                .replace("{query}", &urlencoding::encode(term)),
            alt_text: term.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_images() {
        assert!(NoImages.image_for("Apple").is_none());
    }

    #[test]
    fn test_query_url_encodes_term() {
        let images = QueryUrlImages::new("https://images.example.com/search?q={query}");
        let image = images.image_for("Ödünç almak").unwrap();
        assert_eq!(
            image.url,
            "https://images.example.com/search?q=%C3%96d%C3%BCn%C3%A7%20almak"
        );
        assert_eq!(image.alt_text, "Ödünç almak");
    }

    #[test]
    fn test_blank_term_has_no_image() {
        let images = QueryUrlImages::new("https://images.example.com/{query}");
        assert!(images.image_for("  ").is_none());
    }
}
