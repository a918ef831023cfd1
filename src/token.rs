//! Token parsing: splitting a style token into handler key and argument.

/// A token split into its handler key and optional argument.
///
/// Borrows from the input token; both fields are slices of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedToken<'a> {
    /// The segment before the first colon, or the whole token if no colon.
    pub key: &'a str,
    /// The segment after the first colon, if any. May itself contain colons.
    pub argument: Option<&'a str>,
}

/// Splits a token on its *first* colon.
///
/// `"rounded:lg"` parses to key `"rounded"` with argument `"lg"`. A token
/// without a colon, like `"relative"`, is a bare key with no argument. The
/// argument is the entire remainder and is not parsed further, so bracketed
/// arguments such as `"m:[1:2]"` keep their inner colons.
///
/// Any string is a valid token, including the empty string; this never fails.
///
/// ```rust
/// use breeze_styles::parse_token;
///
/// let parsed = parse_token("rounded:lg");
/// assert_eq!(parsed.key, "rounded");
/// assert_eq!(parsed.argument, Some("lg"));
///
/// let bare = parse_token("relative");
/// assert_eq!(bare.key, "relative");
/// assert_eq!(bare.argument, None);
/// ```
pub fn parse_token(token: &str) -> ParsedToken<'_> {
    match token.split_once(':') {
        Some((key, argument)) => ParsedToken {
            key,
            argument: Some(argument),
        },
        None => ParsedToken {
            key: token,
            argument: None,
        },
    }
}
