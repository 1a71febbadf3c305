use ndarray::Array2;
use streamburn::{GeoTiffOptions, GeoTiffWriter, GeoTransform, GridStats, RasterReader};
use tempfile::TempDir;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_geotiff_write_read_roundtrip() {
    init_logging();

    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("dem.tif");

    let mut grid = Array2::<f32>::zeros((40, 50));
    for i in 0..40 {
        for j in 0..50 {
            grid[[i, j]] = (i * 50 + j) as f32;
        }
    }

    let gt = GeoTransform::north_up(500_000.0, 4_600_000.0, 30.0, -30.0);
    let options = GeoTiffOptions {
        no_data: Some(-9999.0),
        ..Default::default()
    };
    GeoTiffWriter::write_grid::<f32, _>(&path, &grid, &gt, "", &options)
        .expect("Failed to write GeoTIFF");

    let raster = RasterReader::read(&path).expect("Failed to read GeoTIFF back");

    assert_eq!(raster.width(), 50);
    assert_eq!(raster.height(), 40);
    assert_eq!(raster.data[[10, 20]], (10 * 50 + 20) as f32);
    assert_eq!(raster.no_data, Some(-9999.0));
    assert_eq!(raster.geo_transform, gt);
}

#[test]
fn test_no_data_cells_become_nan() {
    init_logging();

    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("holes.tif");

    let mut grid = Array2::<f32>::from_elem((10, 10), 100.0);
    grid[[3, 4]] = -9999.0;
    grid[[7, 1]] = -9999.0;

    let gt = GeoTransform::north_up(0.0, 100.0, 10.0, -10.0);
    let options = GeoTiffOptions {
        no_data: Some(-9999.0),
        ..Default::default()
    };
    GeoTiffWriter::write_grid::<f32, _>(&path, &grid, &gt, "", &options)
        .expect("Failed to write GeoTIFF");

    let raster = RasterReader::read(&path).expect("Failed to read GeoTIFF back");

    assert!(raster.data[[3, 4]].is_nan());
    assert!(raster.data[[7, 1]].is_nan());
    assert_eq!(raster.data[[0, 0]], 100.0);

    // statistics must only cover the valid cells
    let stats = GridStats::compute(&raster.data).expect("No valid cells");
    assert_eq!(stats.valid_count, 98);
    assert_eq!(stats.min, 100.0);
    assert_eq!(stats.max, 100.0);
}

#[test]
fn test_band_type_preserved_through_dispatch() {
    init_logging();

    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("int_dem.tif");

    let mut grid = Array2::<f32>::zeros((8, 8));
    for (idx, v) in grid.iter_mut().enumerate() {
        *v = idx as f32;
    }

    let gt = GeoTransform::north_up(0.0, 80.0, 10.0, -10.0);
    GeoTiffWriter::write_grid::<i16, _>(&path, &grid, &gt, "", &GeoTiffOptions::default())
        .expect("Failed to write Int16 GeoTIFF");

    let raster = RasterReader::read(&path).expect("Failed to read GeoTIFF back");

    assert_eq!(raster.band_type, gdal::raster::GdalDataType::Int16);
    assert_eq!(raster.data[[1, 1]], 9.0);
}

#[test]
fn test_read_missing_file_fails() {
    init_logging();

    let result = RasterReader::read("/nonexistent/path/dem.tif");
    assert!(result.is_err());
}
