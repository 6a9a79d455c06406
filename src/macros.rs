/// Declares nominal brands.
///
/// Each declaration creates an uninhabited `enum` to serve as the tag and a
/// type alias for the brand. An empty enum is nominal, so two declarations can
/// never collide even when they share a base type.
///
/// # Example
///
/// ```rust
/// use branded::{brand, make};
///
/// brand! {
///     /// Identifies a user.
///     pub type UserId = u64 as UserTag;
///     /// Identifies a post.
///     pub type PostId = u64 as PostTag;
/// }
///
/// let user: UserId = make::<UserId>().call(7);
/// assert_eq!(*user, 7);
/// ```
///
/// An optional `in Field` clause selects the reserved field marker:
///
/// ```rust
/// use branded::{brand, Brand};
///
/// enum Legacy {}
///
/// brand! {
///     pub type LegacyUserId = u64 as LegacyUserTag in Legacy;
/// }
///
/// fn accepts(_id: Brand<u64, LegacyUserTag, Legacy>) {}
/// accepts(branded::identity::<LegacyUserId>(3));
/// ```
///
/// Brands declared side by side do not mix:
///
/// ```compile_fail
/// use branded::{brand, make};
///
/// brand! {
///     type UserId = u64 as UserTag;
///     type PostId = u64 as PostTag;
/// }
///
/// let post: PostId = make::<UserId>().call(7);
/// ```
#[macro_export]
macro_rules! brand {
    ($(
        $(#[$meta:meta])*
        $vis:vis type $name:ident = $base:ty as $tag:ident $(in $field:ty)?;
    )*) => {
        $(
            #[doc = concat!("Branding marker of [`", stringify!($name), "`].")]
            #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
            $vis enum $tag {}

            $(#[$meta])*
            $vis type $name = $crate::Brand<$base, $tag $(, $field)?>;
        )*
    };
}
