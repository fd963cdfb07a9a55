//! Pluggable intent routing from free-text input to a tool.

use regex_lite::Regex;
use serde::Serialize;

/// Tool panels a request can be routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolKind {
	Terminal,
	Editor,
	Browser,
	Search,
	Files,
}

/// A routing decision with an optional extracted parameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
	pub tool: ToolKind,
	/// Extracted parameter for the tool (command, url, query, ...), when
	/// the text contains one.
	pub hint: Option<String>,
	pub reasoning: &'static str,
}

/// Maps free text to a tool route; `None` means plain conversation.
///
/// This seam exists so the keyword matcher below can be swapped for a
/// model-backed classifier without touching session or gateway code.
pub trait IntentClassifier {
	fn classify(&self, text: &str) -> Option<Route>;
}

/// Keyword-matching classifier.
pub struct KeywordClassifier {
	command: Regex,
	filename: Regex,
	url: Regex,
	path: Regex,
	query_prefix: Regex,
}

impl KeywordClassifier {
	pub fn new() -> Self {
		Self {
			command: Regex::new(r#"(?i)(?:run|execute|command)\s+["']([^"']+)["']|`([^`]+)`"#)
				.expect("static pattern compiles"),
			filename: Regex::new(r"([A-Za-z0-9_-]+\.[A-Za-z]{1,4})").expect("static pattern compiles"),
			url: Regex::new(r"(?i)(https?://\S+)").expect("static pattern compiles"),
			path: Regex::new(r"/\S*").expect("static pattern compiles"),
			query_prefix: Regex::new(r"(?i)(?:search|find|look up|google)\s+(?:for\s+)?").expect("static pattern compiles"),
		}
	}

	fn extract_command(&self, text: &str) -> Option<String> {
		let captures = self.command.captures(text)?;
		captures
			.get(1)
			.or_else(|| captures.get(2))
			.map(|m| m.as_str().to_string())
	}

	fn extract_filename(&self, text: &str) -> Option<String> {
		self.filename.captures(text).map(|c| c[1].to_string())
	}

	fn extract_url(&self, text: &str) -> Option<String> {
		self.url.captures(text).map(|c| c[1].to_string())
	}

	fn extract_path(&self, text: &str) -> Option<String> {
		self.path.find(text).map(|m| m.as_str().to_string())
	}

	fn extract_query(&self, text: &str) -> String {
		self.query_prefix.replace_all(text, "").trim().to_string()
	}
}

impl Default for KeywordClassifier {
	fn default() -> Self {
		Self::new()
	}
}

impl IntentClassifier for KeywordClassifier {
	fn classify(&self, text: &str) -> Option<Route> {
		let lower = text.to_lowercase();

		let contains_any = |needles: &[&str]| needles.iter().any(|needle| lower.contains(needle));

		if contains_any(&["terminal", "command", "shell"]) {
			return Some(Route {
				tool: ToolKind::Terminal,
				hint: self.extract_command(text),
				reasoning: "User wants to execute terminal commands",
			});
		}
		if contains_any(&["code", "edit", "file"]) {
			return Some(Route {
				tool: ToolKind::Editor,
				hint: self.extract_filename(text),
				reasoning: "User wants to edit code or files",
			});
		}
		if contains_any(&["browse", "web", "website"]) {
			return Some(Route {
				tool: ToolKind::Browser,
				hint: self.extract_url(text),
				reasoning: "User wants to browse the web",
			});
		}
		if contains_any(&["search", "find", "look up"]) {
			return Some(Route {
				tool: ToolKind::Search,
				hint: Some(self.extract_query(text)),
				reasoning: "User wants to search for information",
			});
		}
		if contains_any(&["folder", "directory", "files"]) {
			return Some(Route {
				tool: ToolKind::Files,
				hint: self.extract_path(text),
				reasoning: "User wants to manage files and folders",
			});
		}

		None
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn routes_terminal_with_backtick_command() {
		let classifier = KeywordClassifier::new();
		let route = classifier.classify("open a terminal and run `ls -la`").unwrap();
		assert_eq!(route.tool, ToolKind::Terminal);
		assert_eq!(route.hint.as_deref(), Some("ls -la"));
	}

	#[test]
	fn routes_terminal_with_quoted_command() {
		let classifier = KeywordClassifier::new();
		let route = classifier.classify("execute \"cargo build\" in the shell").unwrap();
		assert_eq!(route.tool, ToolKind::Terminal);
		assert_eq!(route.hint.as_deref(), Some("cargo build"));
	}

	#[test]
	fn routes_editor_with_filename() {
		let classifier = KeywordClassifier::new();
		let route = classifier.classify("edit main.rs please").unwrap();
		assert_eq!(route.tool, ToolKind::Editor);
		assert_eq!(route.hint.as_deref(), Some("main.rs"));
	}

	#[test]
	fn routes_browser_with_url() {
		let classifier = KeywordClassifier::new();
		let route = classifier.classify("browse to https://example.com now").unwrap();
		assert_eq!(route.tool, ToolKind::Browser);
		assert_eq!(route.hint.as_deref(), Some("https://example.com"));
	}

	#[test]
	fn routes_search_and_strips_trigger_words() {
		let classifier = KeywordClassifier::new();
		let route = classifier.classify("search for rust async runtimes").unwrap();
		assert_eq!(route.tool, ToolKind::Search);
		assert_eq!(route.hint.as_deref(), Some("rust async runtimes"));
	}

	#[test]
	fn routes_folders_with_path() {
		let classifier = KeywordClassifier::new();
		let route = classifier.classify("show the folder /tmp/work").unwrap();
		assert_eq!(route.tool, ToolKind::Files);
		assert_eq!(route.hint.as_deref(), Some("/tmp/work"));
	}

	#[test]
	fn plain_conversation_has_no_route() {
		let classifier = KeywordClassifier::new();
		assert!(classifier.classify("how are you today?").is_none());
	}
}
