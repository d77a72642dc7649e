use super::{fill_rows, Kernel};
use crate::error::{DetectError, DetectResult};
use crate::image::{PixelGrid, Raster};

pub(crate) fn check_fits(
    what: &'static str,
    k_rows: usize,
    k_cols: usize,
    grid: &PixelGrid,
) -> DetectResult<()> {
    if k_rows > grid.rows || k_cols > grid.cols {
        return Err(DetectError::configuration(
            what,
            format!(
                "{k_rows}x{k_cols} does not fit in a {}x{} image",
                grid.rows, grid.cols
            ),
        ));
    }
    Ok(())
}

/// Direct 2D convolution with "valid" border policy.
///
/// `out[i][j] = Σ k[a][b] · in[i + ry - a][j + rx - b]` for every `(i, j)`
/// whose kernel footprint lies inside the grid; the border band stays zero.
pub fn convolve_general(grid: &PixelGrid, kernel: &Kernel) -> DetectResult<PixelGrid> {
    check_fits("kernel", kernel.rows(), kernel.cols(), grid)?;
    let (ry, rx) = kernel.radius();
    let (rows, cols) = (grid.rows, grid.cols);
    let (kr, kc) = (kernel.rows(), kernel.cols());
    let mut out = PixelGrid::new(rows, cols);

    fill_rows(&mut out, |i, dst| {
        if i < ry || i + ry >= rows {
            return;
        }
        for (j, px) in dst.iter_mut().enumerate().take(cols - rx).skip(rx) {
            let mut acc = 0.0f32;
            for a in 0..kr {
                let src = grid.row(i + ry - a);
                for b in 0..kc {
                    acc += kernel.get(a, b) * src[j + rx - b];
                }
            }
            *px = acc;
        }
    });

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convolve::gaussian_kernel;

    #[test]
    fn constant_grid_is_preserved_inside_valid_region() {
        let grid = PixelGrid::filled(12, 15, 77.0);
        let k = gaussian_kernel(5, 1.3).unwrap();
        let out = convolve_general(&grid, &k).unwrap();
        for r in 2..10 {
            for c in 2..13 {
                assert!((out.get(r, c) - 77.0).abs() < 1e-3, "({r},{c})={}", out.get(r, c));
            }
        }
        assert_eq!(out.get(0, 0), 0.0);
        assert_eq!(out.get(11, 14), 0.0);
    }

    #[test]
    fn kernel_is_applied_flipped() {
        // Impulse response of a convolution reproduces the kernel itself.
        let mut grid = PixelGrid::new(5, 5);
        grid.set(2, 2, 1.0);
        let k = Kernel::from_row_slice(3, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0])
            .unwrap();
        let out = convolve_general(&grid, &k).unwrap();
        assert_eq!(out.get(1, 1), 1.0);
        assert_eq!(out.get(1, 3), 3.0);
        assert_eq!(out.get(3, 1), 7.0);
        assert_eq!(out.get(2, 2), 5.0);
    }

    #[test]
    fn oversized_kernel_is_a_configuration_error() {
        let grid = PixelGrid::new(3, 10);
        let k = gaussian_kernel(5, 1.0).unwrap();
        assert!(matches!(
            convolve_general(&grid, &k),
            Err(DetectError::Configuration { .. })
        ));
    }
}
