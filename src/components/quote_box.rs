use leptos::prelude::*;

use crate::content::{ColorToken, PaperQuote};

/// Caption of a paper quote: its section, and the theorist it leans on.
fn caption(quote: &PaperQuote) -> String {
	match quote.theorist {
		Some(theorist) => format!("From the paper: {} \u{00b7} {theorist}", quote.section),
		None => format!("From the paper: {}", quote.section),
	}
}

/// A paper excerpt with its section label, bordered in the accent color.
#[component]
pub fn QuoteBox(quote: &'static PaperQuote, #[prop(optional)] color: Option<ColorToken>) -> impl IntoView {
	let color = color.unwrap_or(ColorToken::Gold).hex();

	view! {
		<figure class="quote-box" style:border-left-color=color>
			<blockquote>"\u{201c}"{quote.text}"\u{201d}"</blockquote>
			<figcaption style:color=color>{caption(quote)}</figcaption>
		</figure>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_caption_names_theorist_when_known() {
		let quote = PaperQuote {
			text: "t",
			section: "Reality vs. Illusion",
			theorist: Some("Hayles"),
		};
		assert_eq!(caption(&quote), "From the paper: Reality vs. Illusion \u{00b7} Hayles");

		let quote = PaperQuote {
			theorist: None,
			..quote
		};
		assert_eq!(caption(&quote), "From the paper: Reality vs. Illusion");
	}
}
