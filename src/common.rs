// Copyright 2026 the Imgbasics Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Float shims shared by the geometry modules.

/// Defines a trait that chooses between libstd or libm implementations of float methods.
#[cfg(not(feature = "std"))]
macro_rules! define_float_funcs {
    ($(
        fn $name:ident(self $(,$arg:ident: $arg_ty:ty)*) -> $ret:ty
        => $lname:ident/$lfname:ident;
    )+) => {
        pub(crate) trait FloatFuncs: Sized {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret;)+
        }

        impl FloatFuncs for f32 {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret {
                #[cfg(feature = "libm")]
                return libm::$lfname(self $(,$arg as _)*);

                #[cfg(not(feature = "libm"))]
                compile_error!("imgbasics requires either the `std` or `libm` feature")
            })+
        }

        impl FloatFuncs for f64 {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret {
                #[cfg(feature = "libm")]
                return libm::$lname(self $(,$arg as _)*);

                #[cfg(not(feature = "libm"))]
                compile_error!("imgbasics requires either the `std` or `libm` feature")
            })+
        }
    }
}

#[cfg(not(feature = "std"))]
define_float_funcs! {
    fn hypot(self, other: Self) -> Self => hypot/hypotf;
    fn round(self) -> Self => round/roundf;
}
