use std::borrow::Cow;

/// Renders an optional context suffix for error messages, e.g. `" (Decoding payload)"`.
pub(crate) fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}
