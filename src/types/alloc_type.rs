#[cfg(feature = "std")]
pub type Cow<'a, B> = std::borrow::Cow<'a, B>;
#[cfg(not(feature = "std"))]
pub type Cow<'a, B> = alloc::borrow::Cow<'a, B>;

#[cfg(feature = "std")]
pub use std::boxed::Box;
#[cfg(not(feature = "std"))]
pub use alloc::boxed::Box;

#[cfg(feature = "std")]
pub use std::sync::Arc;
#[cfg(not(feature = "std"))]
pub use alloc::sync::Arc;

#[cfg(feature = "std")]
pub type Vec<T> = std::vec::Vec<T>;
#[cfg(not(feature = "std"))]
pub type Vec<T> = alloc::vec::Vec<T>;

#[cfg(feature = "std")]
pub type String = std::string::String;
#[cfg(not(feature = "std"))]
pub type String = alloc::string::String;

#[cfg(feature = "std")]
pub use std::string::ToString;
#[cfg(not(feature = "std"))]
pub use alloc::string::ToString;

#[cfg(feature = "std")]
pub use std::format;
#[cfg(not(feature = "std"))]
pub use alloc::format;

#[cfg(feature = "std")]
pub use std::vec;
#[cfg(not(feature = "std"))]
pub use alloc::vec;
