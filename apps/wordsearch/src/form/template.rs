//! Form page templates.
//!
//! `render_form` fills `{fields}` with one `FIELD_TEMPLATE` per word slot and
//! refuses to return a page that still contains an unfilled placeholder.

use thiserror::Error;

use crate::puzzle::word_list::WORD_PARAM_PREFIX;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("form must have at least one word input")]
    NoInputs,

    #[error("unresolved template placeholder '{0}'")]
    UnresolvedPlaceholder(String),
}

/// Placeholders the templates may contain; any left over after rendering is an error.
const PLACEHOLDERS: &[&str] = &["{fields}", "{name}", "{label}", "{action}"];

/// Path the form submits to.
pub const FORM_ACTION: &str = "wordsearch.pdf";

// ────────────────────────────────────────────────────────────────────────────
// Page template
// ────────────────────────────────────────────────────────────────────────────

pub const PAGE_TEMPLATE: &str = r#"<!doctype html>
<html lang="en">
<head>
	<meta charset="utf-8" />
	<title>Word Search</title>
	<link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/twitter-bootstrap/4.1.3/css/bootstrap.min.css" />
</head>
<body>
	<nav class="navbar navbar-expand-lg navbar-dark bg-dark">
		<div class="container">
			<a class="navbar-brand" href="/">Word Search</a>
		</div>
	</nav>
	<div class="container">
		<h1 class="text-center mt-3 mb-3">Word Search</h1>

		<p>Add your words below, and then click "Make Word Search!". You can print the word search from the next screen. Leave any word blank if you want fewer words.</p>

		<form method="GET" action="{action}">
{fields}
			<button type="submit" class="btn btn-success float-right">Make Word Search!</button>
		</form>

		<div class="clearfix"></div>
	</div>
	<footer class="text-muted mt-5 pt-5 pb-5 mb-5">
		<div class="container">
			<em>&copy; 2020 Callum Jones</em>
		</div>
	</footer>
</body>
</html>
"#;

pub const FIELD_TEMPLATE: &str = r#"			<div class="form-group row">
				<label for="{name}" class="col-sm-2 col-form-label">{label}</label>
				<div class="col-sm-10">
					<input type="text" class="form-control" id="{name}" name="{name}">
				</div>
			</div>
"#;

/// Renders the form page with `num_words` text inputs named `Word_0 .. Word_{n-1}`.
pub fn render_form(num_words: usize) -> Result<String, TemplateError> {
    if num_words == 0 {
        return Err(TemplateError::NoInputs);
    }

    let fields: String = (0..num_words)
        .map(|i| {
            FIELD_TEMPLATE
                .replace("{name}", &format!("{WORD_PARAM_PREFIX}{i}"))
                .replace("{label}", &format!("Word {}", i + 1))
        })
        .collect();

    let page = PAGE_TEMPLATE
        .replace("{action}", FORM_ACTION)
        .replace("{fields}", &fields);

    check_resolved(&page)?;
    Ok(page)
}

fn check_resolved(page: &str) -> Result<(), TemplateError> {
    match PLACEHOLDERS.iter().find(|p| page.contains(*p)) {
        Some(p) => Err(TemplateError::UnresolvedPlaceholder(p.to_string())),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::NUM_WORDS;

    #[test]
    fn test_renders_one_input_per_word() {
        let page = render_form(NUM_WORDS).unwrap();
        assert_eq!(page.matches("<input ").count(), NUM_WORDS);
        assert!(page.contains(r#"name="Word_0""#));
        assert!(page.contains(r#"name="Word_13""#));
        assert!(!page.contains(r#"name="Word_14""#));
        assert!(page.contains(">Word 14</label>"));
    }

    #[test]
    fn test_submits_to_pdf_route() {
        let page = render_form(3).unwrap();
        assert!(page.contains(r#"<form method="GET" action="wordsearch.pdf">"#));
        assert!(page.starts_with("<!doctype html>"));
    }

    #[test]
    fn test_page_ends_with_footer() {
        let page = render_form(NUM_WORDS).unwrap();
        let footer = page.find(r#"<footer class="text-muted mt-5 pt-5 pb-5 mb-5">"#).unwrap();
        assert!(page.contains("<em>&copy; 2020 Callum Jones</em>"));
        assert!(footer > page.find("</form>").unwrap());
        assert!(footer < page.find("</body>").unwrap());
    }

    #[test]
    fn test_zero_inputs_is_error() {
        assert_eq!(render_form(0).unwrap_err(), TemplateError::NoInputs);
    }

    #[test]
    fn test_unresolved_placeholder_detected() {
        let err = check_resolved("<p>{label}</p>").unwrap_err();
        assert_eq!(err, TemplateError::UnresolvedPlaceholder("{label}".to_string()));
        assert!(check_resolved("<p>ok</p>").is_ok());
    }
}
