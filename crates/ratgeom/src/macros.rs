/// Implement `$imp` for every owned/borrowed combination of `$t` by
/// forwarding to an inherent `fn $inner(&self, &Self) -> Self`.
macro_rules! forward_binop {
    ($t:ty, $imp:ident, $method:ident, $inner:ident) => {
        impl std::ops::$imp<&$t> for &$t {
            type Output = $t;
            #[inline]
            fn $method(self, rhs: &$t) -> $t {
                <$t>::$inner(self, rhs)
            }
        }
        impl std::ops::$imp<$t> for $t {
            type Output = $t;
            #[inline]
            fn $method(self, rhs: $t) -> $t {
                <$t>::$inner(&self, &rhs)
            }
        }
        impl std::ops::$imp<&$t> for $t {
            type Output = $t;
            #[inline]
            fn $method(self, rhs: &$t) -> $t {
                <$t>::$inner(&self, rhs)
            }
        }
        impl std::ops::$imp<$t> for &$t {
            type Output = $t;
            #[inline]
            fn $method(self, rhs: $t) -> $t {
                <$t>::$inner(self, &rhs)
            }
        }
    };
}
