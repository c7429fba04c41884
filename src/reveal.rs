//! Show/hide control for answer blocks ("fasit").
//!
//! The state lives in [`RevealToggle`], a plain boolean with a pure
//! transition. Rendering emits the markup for the current state; in the
//! browser the inline site script performs the same transition on click by
//! flipping `data-revealed`, the button label and the body's `hidden`
//! attribute. Nothing is persisted: every page load starts hidden.

use maud::{Markup, html};

pub const SHOW_LABEL: &str = "Vis fasit";
pub const HIDE_LABEL: &str = "Skjul fasit";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealToggle {
    revealed: bool,
}

impl RevealToggle {
    /// Starts hidden.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// The state after one activation.
    pub fn toggled(self) -> Self {
        Self {
            revealed: !self.revealed,
        }
    }

    pub fn toggle(&mut self) {
        *self = self.toggled();
    }

    pub fn label(&self) -> &'static str {
        if self.revealed { HIDE_LABEL } else { SHOW_LABEL }
    }

    /// Render the toggle button and, depending on state, the answer body.
    ///
    /// The body is always emitted so the browser can reveal it without a
    /// reload; when hidden it carries the `hidden` attribute.
    pub fn render(&self, children: Markup) -> Markup {
        html! {
            div.fasit data-revealed=(flag(self.revealed)) {
                button.fasit-toggle type="button" aria-expanded=(flag(self.revealed)) {
                    (self.label())
                }
                div.fasit-body hidden[!self.revealed] {
                    (children)
                }
            }
        }
    }
}

fn flag(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer() -> Markup {
        html! { p { "x = 4" } }
    }

    #[test]
    fn starts_hidden_with_show_label() {
        let toggle = RevealToggle::new();
        assert!(!toggle.is_revealed());
        assert_eq!(toggle.label(), "Vis fasit");

        let html = toggle.render(answer()).into_string();
        assert!(html.contains(">Vis fasit</button>"));
        assert!(html.contains(r#"data-revealed="false""#));
        assert!(html.contains(r#"<div class="fasit-body" hidden>"#));
    }

    #[test]
    fn one_activation_reveals() {
        let mut toggle = RevealToggle::new();
        toggle.toggle();
        assert!(toggle.is_revealed());
        assert_eq!(toggle.label(), "Skjul fasit");

        let html = toggle.render(answer()).into_string();
        assert!(html.contains(">Skjul fasit</button>"));
        assert!(html.contains(r#"<div class="fasit-body"><p>x = 4</p></div>"#));
        assert!(!html.contains("hidden"));
    }

    #[test]
    fn two_activations_return_to_initial() {
        let initial = RevealToggle::new();
        assert_eq!(initial.toggled().toggled(), initial);

        let mut toggle = RevealToggle::new();
        toggle.toggle();
        toggle.toggle();
        assert_eq!(
            toggle.render(answer()).into_string(),
            initial.render(answer()).into_string()
        );
    }
}
