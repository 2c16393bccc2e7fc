/// Declares a restricted enumeration and its registration table.
///
/// ```
/// use ddd_primitives_domain::{enumeration::Enum, restricted_enum};
///
/// restricted_enum! {
///     pub OrderStatus: i64 {
///         NEW = 1,
///         IN_PROGRESS = 2,
///     }
/// }
///
/// let status = OrderStatus::of_in_progress();
/// assert!(status.is(&OrderStatus::IN_PROGRESS));
/// assert_eq!(status.to_string(), "orderStatus.inProgress");
/// assert!(Enum::<OrderStatus>::new(7).is_err());
/// ```
///
/// The unset sentinel is legal unless `where unset = false` follows the value type.
/// Each constant `FOO_BAR` gets a factory `of_foo_bar()` returning `Enum<Type>`.
#[macro_export]
macro_rules! restricted_enum {
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident : $value:ty $(where unset = $unset:literal)? {
            $( $(#[$cmeta:meta])* $constant:ident = $raw:expr ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {}

        impl $name {
            $( $(#[$cmeta])* pub const $constant: $value = $raw; )+
        }

        impl $crate::enumeration::EnumDefinition for $name {
            type Value = $value;

            const TYPE_NAME: &'static str = stringify!($name);
            const CONSTANTS: &'static [(&'static str, $value)] =
                &[ $( (stringify!($constant), $name::$constant) ),+ ];
            $( const UNSET_ALLOWED: bool = $unset; )?
        }

        $crate::__private::paste! {
            impl $name {
                $(
                    #[doc = concat!("Validated `", stringify!($name), "::", stringify!($constant), "`.")]
                    pub fn [<of_ $constant:lower>]() -> $crate::enumeration::Enum<$name> {
                        $crate::enumeration::Enum::from_declared($name::$constant)
                    }
                )+
            }
        }
    };
}
