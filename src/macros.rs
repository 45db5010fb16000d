/// Declares one enumerated attribute domain together with its token table.
///
/// Each entry pairs a variant with its canonical DOT token. The macro prepends the
/// `Unset` sentinel at discriminant 0 (token `""`), numbers the remaining variants in
/// declaration order, and builds the table in the same order, so the discriminant of a
/// variant is always its index into the table.
///
/// ```rust, ignore
/// domain_table! {
///     /// Direction of the rank layout.
///     pub enum RankDir {
///         TopBottom => "TB",
///         LeftRight => "LR",
///     }
/// }
///
/// assert_eq!(RankDir::LeftRight.as_token(), "LR");
/// ```
macro_rules! domain_table {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $token:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone,
            Copy,
            Debug,
            Default,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            strum::EnumIter,
            strum::EnumCount,
        )]
        #[repr(u16)]
        $vis enum $name {
            /// Not set. Maps to the empty token, so the attribute is omitted.
            #[default]
            Unset = 0,
            $(
                $(#[$vmeta])*
                #[doc = concat!("`", $token, "`")]
                $variant,
            )+
        }

        impl $crate::catalog::DomainValue for $name {
            const DOMAIN: $crate::catalog::Domain = $crate::catalog::Domain::$name;
            const TOKENS: &'static [&'static str] = &["", $($token),+];

            #[inline]
            fn index(self) -> usize {
                self as usize
            }
        }

        const _: () = assert!(
            <$name as $crate::catalog::DomainValue>::TOKENS.len()
                == <$name as strum::EnumCount>::COUNT
        );

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::catalog::DomainValue::as_token(*self))
            }
        }
    };
}

/// Declares the closed [`Domain`](crate::catalog::Domain) enumeration from the list of
/// domain types, along with the per-domain table dispatch.
///
/// ```rust, ignore
/// catalog_domains! {
///     /// Node and edge colours.
///     Color,
///     /// Node shapes.
///     NodeShape,
/// }
/// ```
macro_rules! catalog_domains {
    (
        $(
            $(#[$meta:meta])*
            $name:ident
        ),+ $(,)?
    ) => {
        /// Identifies one closed enumerated attribute domain.
        ///
        /// Every domain has a typed enum of the same name implementing
        /// [`DomainValue`], and a token table reachable through
        /// [`EnumCatalog::tokens`].
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::EnumIter, strum::EnumCount)]
        pub enum Domain {
            $(
                $(#[$meta])*
                $name,
            )+
        }

        impl Domain {
            /// Returns the name of the domain.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Domain::$name => stringify!($name),)+
                }
            }

            /// Returns the token table of the domain, indexed by raw value.
            #[must_use]
            pub const fn tokens(self) -> &'static [&'static str] {
                match self {
                    $(Domain::$name => <$name as DomainValue>::TOKENS,)+
                }
            }
        }
    };
}
