//! MiniJinja filter registration.

use minijinja::{Environment, Value};

use crate::output::OutputMode;
use crate::style::builtin;
use crate::theme::Theme;
use crate::util::{pad_to_width, truncate_to_width};

/// Registers all built-in filters on a minijinja environment.
pub(crate) fn register_filters(env: &mut Environment<'static>, theme: Theme, mode: OutputMode) {
    let is_debug = mode.is_debug();
    let use_color = mode.should_use_color();

    // {{ value | style("name") }} applies a theme style.
    env.add_filter("style", move |value: Value, name: String| -> String {
        let text = value.to_string();
        if is_debug {
            theme.apply_debug(&name, &text)
        } else {
            theme.apply(&name, &text, use_color)
        }
    });

    // {{ value | glyph("bold") }} applies a built-in style; unknown ids pass through.
    env.add_filter("glyph", |value: Value, id: String| -> String {
        builtin().transform(&value.to_string(), &id)
    });

    env.add_filter("truncate_to", |value: Value, width: usize| -> String {
        truncate_to_width(&value.to_string(), width)
    });

    env.add_filter("pad_to", |value: Value, width: usize| -> String {
        pad_to_width(&value.to_string(), width)
    });

    env.add_filter("nl", |value: Value| -> String { format!("{}\n", value) });
}
