/// Creates [`FieldValues`](crate::FieldValues) from name/value pairs.
///
/// ```rust
/// use formdeck::{FieldValue, fd_values};
///
/// let values = fd_values! { "name" => "Ada", "age" => 36 };
/// assert_eq!(values.get("age"), Some(&FieldValue::Number(36.0)));
/// assert_eq!(values.len(), 2);
/// ```
#[macro_export]
macro_rules! fd_values {
    () => {
        $crate::FieldValues::new()
    };
    ($($name:expr => $value:expr),+ $(,)?) => {
        $crate::FieldValues::new()$(.with($name, $value))+
    };
}

/// Creates a [`FieldDescriptor`](crate::FieldDescriptor) from an input-kind shorthand.
///
/// ```rust
/// use formdeck::{InputKind, fd_field};
///
/// let email = fd_field!(email "email", "Email", required);
/// assert_eq!(email.input_kind, InputKind::Email);
/// assert!(email.required);
///
/// let card = fd_field!(choice "cardType", "Card Type", ["Visa", "MasterCard"]);
/// assert_eq!(card.choices(), ["Visa", "MasterCard"]);
/// assert_eq!(card.placeholder().as_deref(), Some("Select Card Type"));
/// ```
#[macro_export]
macro_rules! fd_field {
    (choice $name:expr, $label:expr, [$($choice:expr),+ $(,)?], required $(,)?) => {
        $crate::FieldDescriptor::choice($name, $label, [$($choice),+]).required()
    };
    (choice $name:expr, $label:expr, [$($choice:expr),+ $(,)?] $(,)?) => {
        $crate::FieldDescriptor::choice($name, $label, [$($choice),+])
    };
    ($kind:ident $name:expr, $label:expr, required $(,)?) => {
        $crate::fd_field!($kind $name, $label).required()
    };
    ($kind:ident $name:expr, $label:expr $(,)?) => {
        $crate::FieldDescriptor::new($name, $crate::InputKind::from(stringify!($kind)), $label)
    };
}

/// Creates a [`FormSchema`](crate::FormSchema) result from field shorthands.
///
/// ```rust
/// use formdeck::fd_schema;
///
/// let schema = fd_schema![
///     (text "street", "Street", required),
///     (text "zip", "ZIP Code"),
/// ]
/// .expect("distinct field names");
/// assert_eq!(schema.required_fields().count(), 1);
/// ```
#[macro_export]
macro_rules! fd_schema {
    ($(($($field:tt)+)),* $(,)?) => {
        $crate::FormSchema::new(vec![$($crate::fd_field!($($field)+)),*])
    };
}
