//! Geometric primitives: planar and spatial vectors, rectangles and lines.
//!
//! Plain value types with the obvious arithmetic; none of them share state
//! with the color types beyond [`Vector3`]'s projection from a
//! [`Color`](crate::color::Color).

// Component-wise arithmetic with another vector and with a scalar on either
// side. A scalar on the left mirrors the vector-on-the-left form.
macro_rules! impl_vector_ops {
    ($T:ident { $($f:ident),+ }) => {
        impl_vector_ops!(@op $T { $($f),+ } Add add AddAssign add_assign +);
        impl_vector_ops!(@op $T { $($f),+ } Sub sub SubAssign sub_assign -);
        impl_vector_ops!(@op $T { $($f),+ } Mul mul MulAssign mul_assign *);
        impl_vector_ops!(@op $T { $($f),+ } Div div DivAssign div_assign /);
    };
    (@op $T:ident { $($f:ident),+ } $Op:ident $op:ident $OpAssign:ident $op_assign:ident $tok:tt) => {
        impl ::std::ops::$Op for $T {
            type Output = $T;

            fn $op(self, rhs: $T) -> $T {
                $T { $($f: self.$f $tok rhs.$f),+ }
            }
        }

        impl ::std::ops::$Op<$crate::scalar::Scalar> for $T {
            type Output = $T;

            fn $op(self, rhs: $crate::scalar::Scalar) -> $T {
                $T { $($f: self.$f $tok rhs),+ }
            }
        }

        impl ::std::ops::$Op<$T> for $crate::scalar::Scalar {
            type Output = $T;

            fn $op(self, rhs: $T) -> $T {
                $T { $($f: rhs.$f $tok self),+ }
            }
        }

        impl ::std::ops::$OpAssign for $T {
            fn $op_assign(&mut self, rhs: $T) {
                $(self.$f = self.$f $tok rhs.$f;)+
            }
        }

        impl ::std::ops::$OpAssign<$crate::scalar::Scalar> for $T {
            fn $op_assign(&mut self, rhs: $crate::scalar::Scalar) {
                $(self.$f = self.$f $tok rhs;)+
            }
        }
    };
}

mod line;
mod rect;
mod vector2;
mod vector3;

pub use line::Line;
pub use rect::Rect;
pub use vector2::Vector2;
pub use vector3::Vector3;
