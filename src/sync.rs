//! Lock used by [`ConcurrentErrors`](crate::ConcurrentErrors): `parking_lot` with
//! `std`, a spin lock otherwise. Neither poisons.
#[cfg(feature = "std")]
pub(crate) use parking_lot::Mutex;

#[cfg(not(feature = "std"))]
pub(crate) use spin::Mutex;
