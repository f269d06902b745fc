/// A closed set of cases, each identified by a tag.
pub trait Variant {
    /// Tags of every case, in declaration order.
    const TAGS: &'static [&'static str];

    fn tag(&self) -> &'static str;
}

/// Declares an enum whose cases carry named positional payloads.
///
/// Besides the enum itself this generates:
/// - a [`Variant`] impl,
/// - `<Enum>Match`, a handler table with one builder method per case
///   (the snake-cased case name) and a `wildcard`, filled in by the
///   closure passed to `match_with`,
/// - `<Enum>Tap`, a table of optional side-effect handlers, filled in by
///   the closure passed to `tap`.
///
/// ```ignore
/// variant! {
///     pub enum Shape {
///         Circle(radius: u32),
///         Rect(width: u32, height: u32),
///         Empty,
///     }
/// }
///
/// let area = shape.match_with(|arms| {
///     arms.rect(|width, height| width * height).wildcard(|| 0)
/// });
/// ```
///
/// `match_with` panics if the active case has neither a handler nor a
/// wildcard. A plain `match` is the exhaustive alternative.
#[macro_export]
macro_rules! variant {
    (
        $(#[$outer:meta])*
        $vis:vis enum $name:ident $(<$($gen:ident),+ $(,)?>)? {
            $(
                $(#[$inner:meta])*
                $case:ident $(($($field:ident: $ty:ty),* $(,)?))?
            ),+ $(,)?
        }
    ) => {
        $crate::__private::preinterpret! {
            $(#[$outer])*
            $vis enum $name $(<$($gen),+>)? {
                $(
                    $(#[$inner])*
                    $case $(($($ty),*))?,
                )+
            }

            impl $(<$($gen),+>)? $crate::variant::Variant for $name $(<$($gen),+>)? {
                const TAGS: &'static [&'static str] = &[$(stringify!($case)),+];

                fn tag(&self) -> &'static str {
                    match self {
                        $(Self::$case { .. } => stringify!($case),)+
                    }
                }
            }

            #[must_use = "a handler table does nothing until passed to `match_with`"]
            $vis struct [!ident! $name Match]<'m, $($($gen,)+)? R> {
                $(
                    [!ident_snake! $case]: $crate::__private::Option<
                        $crate::__private::Box<dyn FnOnce($($($ty),*)?) -> R + 'm>,
                    >,
                )+
                wildcard: $crate::__private::Option<$crate::__private::Box<dyn FnOnce() -> R + 'm>>,
            }

            impl<'m, $($($gen,)+)? R> [!ident! $name Match]<'m, $($($gen,)+)? R> {
                pub fn new() -> Self {
                    Self {
                        $([!ident_snake! $case]: $crate::__private::Option::None,)+
                        wildcard: $crate::__private::Option::None,
                    }
                }

                $(
                    pub fn [!ident_snake! $case](
                        mut self,
                        handler: impl FnOnce($($($ty),*)?) -> R + 'm,
                    ) -> Self {
                        self.[!ident_snake! $case] =
                            $crate::__private::Option::Some($crate::__private::Box::new(handler));
                        self
                    }
                )+

                /// Runs when the active case has no handler of its own.
                pub fn wildcard(mut self, handler: impl FnOnce() -> R + 'm) -> Self {
                    self.wildcard =
                        $crate::__private::Option::Some($crate::__private::Box::new(handler));
                    self
                }
            }

            impl<'m, $($($gen,)+)? R> ::core::default::Default for [!ident! $name Match]<'m, $($($gen,)+)? R> {
                fn default() -> Self {
                    Self::new()
                }
            }

            #[must_use = "a handler table does nothing until passed to `tap`"]
            $vis struct [!ident! $name Tap]<'t $($(, $gen)+)?> {
                $(
                    [!ident_snake! $case]: $crate::__private::Option<
                        $crate::__private::Box<dyn FnOnce($($(&$ty),*)?) + 't>,
                    >,
                )+
            }

            impl<'t $($(, $gen)+)?> [!ident! $name Tap]<'t $($(, $gen)+)?> {
                pub fn new() -> Self {
                    Self {
                        $([!ident_snake! $case]: $crate::__private::Option::None,)+
                    }
                }

                $(
                    pub fn [!ident_snake! $case](
                        mut self,
                        handler: impl FnOnce($($(&$ty),*)?) + 't,
                    ) -> Self {
                        self.[!ident_snake! $case] =
                            $crate::__private::Option::Some($crate::__private::Box::new(handler));
                        self
                    }
                )+
            }

            impl<'t $($(, $gen)+)?> ::core::default::Default for [!ident! $name Tap]<'t $($(, $gen)+)?> {
                fn default() -> Self {
                    Self::new()
                }
            }

            impl $(<$($gen),+>)? $name $(<$($gen),+>)? {
                /// Runs exactly one of the handlers registered by `arms` and
                /// returns its result.
                #[track_caller]
                pub fn match_with<'m, R>(
                    self,
                    arms: impl FnOnce(
                        [!ident! $name Match]<'m, $($($gen,)+)? R>,
                    ) -> [!ident! $name Match]<'m, $($($gen,)+)? R>,
                ) -> R {
                    let arms = arms([!ident! $name Match]::new());
                    match self {
                        $(
                            Self::$case $(($($field),*))? => match arms.[!ident_snake! $case] {
                                $crate::__private::Option::Some(handler) => handler($($($field),*)?),
                                $crate::__private::Option::None => match arms.wildcard {
                                    $crate::__private::Option::Some(wildcard) => wildcard(),
                                    $crate::__private::Option::None => panic!(
                                        "no handler for variant `{}` and no wildcard",
                                        stringify!($case),
                                    ),
                                },
                            },
                        )+
                    }
                }

                /// Runs the handler registered by `handlers` for the active case,
                /// if any, and hands `self` back.
                pub fn tap<'t>(
                    self,
                    handlers: impl FnOnce(
                        [!ident! $name Tap]<'t $($(, $gen)+)?>,
                    ) -> [!ident! $name Tap]<'t $($(, $gen)+)?>,
                ) -> Self {
                    let handlers = handlers([!ident! $name Tap]::new());
                    match &self {
                        $(
                            Self::$case $(($($field),*))? => {
                                if let $crate::__private::Option::Some(handler) =
                                    handlers.[!ident_snake! $case]
                                {
                                    handler($($($field),*)?);
                                }
                            }
                        )+
                    }
                    self
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use core::cell::Cell;

    use super::Variant;

    crate::variant! {
        #[derive(Debug)]
        #[derive(Clone, Copy)]
        #[derive(PartialEq, Eq)]
        enum Shape {
            Circle(radius: u32),
            Rect(width: u32, height: u32),
            Empty,
        }
    }

    #[test]
    fn test_tags() {
        assert_eq!(Shape::TAGS, &["Circle", "Rect", "Empty"]);
        assert_eq!(Shape::Circle(1).tag(), "Circle");
        assert_eq!(Shape::Rect(1, 2).tag(), "Rect");
        assert_eq!(Shape::Empty.tag(), "Empty");
    }

    #[test]
    fn test_match_with_specific_handler() {
        let area = |shape: Shape| {
            shape.match_with(|arms| {
                arms.circle(|radius| 3 * radius * radius)
                    .rect(|width, height| width * height)
                    .empty(|| 0)
            })
        };
        assert_eq!(area(Shape::Circle(2)), 12);
        assert_eq!(area(Shape::Rect(2, 5)), 10);
        assert_eq!(area(Shape::Empty), 0);
    }

    #[test]
    fn test_match_with_wildcard() {
        let is_round = |shape: Shape| {
            shape.match_with(|arms| arms.circle(|_| true).wildcard(|| false))
        };
        assert!(is_round(Shape::Circle(1)));
        assert!(!is_round(Shape::Rect(1, 1)));
        assert!(!is_round(Shape::Empty));
    }

    #[test]
    fn test_match_with_prefers_specific_handler_over_wildcard() {
        let value = Shape::Empty.match_with(|arms| arms.empty(|| 1).wildcard(|| 2));
        assert_eq!(value, 1);
    }

    #[test]
    #[should_panic(expected = "no handler for variant `Rect` and no wildcard")]
    fn test_match_with_missing_handler() {
        Shape::Rect(1, 1).match_with(|arms| arms.circle(|radius| radius));
    }

    #[test]
    fn test_tap() {
        let seen = Cell::new(0);
        let shape = Shape::Rect(3, 4).tap(|handlers| {
            handlers
                .circle(|_| seen.set(1))
                .rect(|width, height| seen.set(width * height))
        });
        assert_eq!(shape, Shape::Rect(3, 4));
        assert_eq!(seen.get(), 12);

        let shape = Shape::Empty.tap(|handlers| handlers.circle(|_| seen.set(0)));
        assert_eq!(shape, Shape::Empty);
        assert_eq!(seen.get(), 12);
    }
}
