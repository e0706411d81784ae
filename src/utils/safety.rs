//! Pixel buffer access macro
//!
//! Debug builds index with bounds checks so an off-by-one in the rasterizer
//! panics with a useful message. Release builds use unchecked access; every
//! call site has already clipped its coordinates to the canvas.
//!
//! Usage:
//! ```rust
//! use raylines::fast;
//!
//! let mut pixels = vec![0u32; 4];
//! fast!(pixels, [2] = 0xFF00_00FF);
//! assert_eq!(*fast!(pixels, [2]), 0xFF00_00FF);
//! ```

/// Read: `fast!(slice, [index])`, write: `fast!(slice, [index] = value)`
#[macro_export]
macro_rules! fast {
    ($slice:expr, [$index:expr]) => {{
        #[cfg(debug_assertions)]
        {
            &$slice[$index]
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { $slice.get_unchecked($index) }
        }
    }};

    ($slice:expr, [$index:expr] = $val:expr) => {{
        #[cfg(debug_assertions)]
        {
            $slice[$index] = $val;
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { *$slice.get_unchecked_mut($index) = $val; }
        }
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn fast_reads_and_writes_packed_pixels() {
        let mut pixels = vec![0u32; 8];
        fast!(pixels, [5] = 0xFF10_2030);
        assert_eq!(*fast!(pixels, [5]), 0xFF10_2030);
        assert_eq!(pixels[4], 0);
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn fast_checks_bounds_in_debug() {
        let pixels = vec![0u32; 3];
        let _ = *fast!(pixels, [3]);
    }
}
