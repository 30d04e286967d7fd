//! Content loading for the landing page.
//!
//! The authored content lives in `content/cabeza.toml` and is embedded at
//! compile time, so the WASM app never touches the network for copy. The
//! static renderer can point at another file with `--content`.

use std::path::Path;

use crate::error::ContentError;
use crate::types::SiteContent;

/// Content file shipped with the crate.
pub const EMBEDDED_CONTENT: &str = include_str!("../content/cabeza.toml");

impl SiteContent {
    /// Parse and validate the embedded content.
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_toml_str(EMBEDDED_CONTENT)
    }

    /// Parse and validate content from a TOML string.
    pub fn from_toml_str(source: &str) -> Result<Self, ContentError> {
        let content: SiteContent = toml::from_str(source)?;
        content.validate()?;
        Ok(content)
    }

    /// Load content from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self, ContentError> {
        let source = std::fs::read_to_string(path).map_err(|source| ContentError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = source.len(), "loaded content file");
        Self::from_toml_str(&source)
    }

    /// Check the invariants the components rely on.
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.brand.name.trim().is_empty() {
            return Err(ContentError::invalid("brand.name", "must not be empty"));
        }
        if self.meta.title.trim().is_empty() {
            return Err(ContentError::invalid("meta.title", "must not be empty"));
        }

        require_https("links.form_url", &self.links.form_url)?;
        require_https("links.scheduling_url", &self.links.scheduling_url)?;
        require_https("links.linkedin_url", &self.links.linkedin_url)?;
        if !self.links.email.contains('@') {
            return Err(ContentError::invalid(
                "links.email",
                format!("`{}` is not an email address", self.links.email),
            ));
        }
        if let Some(chat) = &self.chat {
            require_https("chat.script_src", &chat.script_src)?;
            if chat.site_id.trim().is_empty() {
                return Err(ContentError::invalid("chat.site_id", "must not be empty"));
            }
        }

        for (idx, service) in self.services.iter().enumerate() {
            if service.title.trim().is_empty() {
                return Err(ContentError::invalid(
                    format!("services[{idx}].title"),
                    "must not be empty",
                ));
            }
        }
        for (idx, step) in self.process.iter().enumerate() {
            if step.title.trim().is_empty() {
                return Err(ContentError::invalid(
                    format!("process[{idx}].title"),
                    "must not be empty",
                ));
            }
        }
        for (idx, faq) in self.faqs.iter().enumerate() {
            if faq.question.trim().is_empty() {
                return Err(ContentError::invalid(
                    format!("faqs[{idx}].question"),
                    "must not be empty",
                ));
            }
        }

        Ok(())
    }
}

fn require_https(field: &str, url: &str) -> Result<(), ContentError> {
    if url.starts_with("https://") {
        Ok(())
    } else {
        Err(ContentError::invalid(
            field,
            format!("`{url}` must be an https:// URL"),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ServiceIcon;
    use std::io::Write;
    use tempfile::TempDir;

    const MINIMAL: &str = r#"
[meta]
title = "Test"

[brand]
name = "ACME"

[links]
form_url = "https://forms.example.com/x"
scheduling_url = "https://cal.example.com/acme"
email = "hello@example.com"
linkedin_url = "https://linkedin.com/company/acme"
"#;

    #[test]
    fn embedded_content_is_valid() {
        let content = SiteContent::embedded().expect("embedded content");
        assert_eq!(content.brand.name, "CABEZA");
        assert_eq!(content.services.len(), 3);
        assert_eq!(content.process.len(), 3);
        assert!(content.faqs.len() > 3, "accordion needs more than the preview");
        assert!(content.chat.is_some());
    }

    #[test]
    fn embedded_services_keep_authored_order() {
        let content = SiteContent::embedded().expect("embedded content");
        let titles: Vec<_> = content.services.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "AI Education & Training",
                "Strategic Consultation",
                "Custom AI Automation"
            ]
        );
        assert_eq!(content.services[1].icon, ServiceIcon::Handshake);
    }

    #[test]
    fn minimal_content_uses_defaults() {
        let content = SiteContent::from_toml_str(MINIMAL).expect("minimal content");
        assert!(content.chat.is_none());
        assert!(content.services.is_empty());
        assert!(content.faqs.is_empty());
        assert_eq!(content.links.mailto(), "mailto:hello@example.com");
    }

    #[test]
    fn faq_details_are_optional() {
        let source = format!(
            "{MINIMAL}\n[[faqs]]\nquestion = \"Q\"\nanswer = \"A\"\n"
        );
        let content = SiteContent::from_toml_str(&source).expect("content");
        assert!(content.faqs[0].details.is_empty());
    }

    #[test]
    fn rejects_malformed_toml() {
        let err = SiteContent::from_toml_str("[meta\ntitle = ").unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
    }

    #[test]
    fn rejects_unknown_service_icon() {
        let source = format!(
            "{MINIMAL}\n[[services]]\nicon = \"rocket\"\ntitle = \"T\"\ndescription = \"D\"\n"
        );
        let err = SiteContent::from_toml_str(&source).unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
    }

    #[test]
    fn rejects_plain_http_links() {
        let source = MINIMAL.replace("https://forms.example.com/x", "http://forms.example.com/x");
        let err = SiteContent::from_toml_str(&source).unwrap_err();
        match err {
            ContentError::Invalid { field, .. } => assert_eq!(field, "links.form_url"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_empty_faq_question() {
        let source = format!("{MINIMAL}\n[[faqs]]\nquestion = \"  \"\nanswer = \"A\"\n");
        let err = SiteContent::from_toml_str(&source).unwrap_err();
        match err {
            ContentError::Invalid { field, .. } => assert_eq!(field, "faqs[0].question"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_chat_without_site_id() {
        let source = format!(
            "{MINIMAL}\n[chat]\nscript_src = \"https://chat.example.com/embed.js\"\nsite_id = \"\"\n"
        );
        let err = SiteContent::from_toml_str(&source).unwrap_err();
        assert!(err.to_string().contains("chat.site_id"));
    }

    #[test]
    fn rejects_bad_email() {
        let source = MINIMAL.replace("hello@example.com", "hello");
        let err = SiteContent::from_toml_str(&source).unwrap_err();
        assert!(err.to_string().contains("links.email"));
    }

    #[test]
    fn load_from_path_reads_file() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("content.toml");
        let mut file = std::fs::File::create(&path).expect("create content");
        write!(file, "{MINIMAL}").expect("write content");

        let content = SiteContent::load_from_path(&path).expect("load");
        assert_eq!(content.brand.name, "ACME");
    }

    #[test]
    fn load_from_missing_path_is_read_error() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("missing.toml");
        let err = SiteContent::load_from_path(&path).unwrap_err();
        assert!(matches!(err, ContentError::Read { .. }));
    }
}
