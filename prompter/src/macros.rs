/// Builds a [`StaticVariables`](crate::StaticVariables) resolver from
/// `name => value` pairs.
///
/// ```rust
/// use prompter::static_variables;
///
/// let variables = static_variables! {
///     "vQuestion" => "Which region grew fastest?",
///     "vRegion" => "EMEA",
/// };
/// let _ = variables;
/// ```
#[macro_export]
macro_rules! static_variables {
    () => {
        $crate::StaticVariables::new()
    };
    ($($name:expr => $value:expr),+ $(,)?) => {
        $crate::StaticVariables::new()$(.with_text($name, $value))+
    };
}
