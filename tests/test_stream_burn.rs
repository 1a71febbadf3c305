use ndarray::array;
use streamburn::{GeoTiffOptions, GeoTiffWriter, GeoTransform, RasterReader, StreamBurner};
use tempfile::TempDir;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_burn_to_file_end_to_end() {
    init_logging();

    let dir = TempDir::new().expect("Failed to create temp dir");
    let dem_path = dir.path().join("dem.tif");
    let burned_path = dir.path().join("dem_streamburn1.tif");

    // toy DEM with one missing cell
    let dem_grid = array![[10.0_f32, 20.0], [-9999.0, 40.0]];
    let gt = GeoTransform::north_up(500_000.0, 4_600_000.0, 30.0, -30.0);
    let options = GeoTiffOptions {
        no_data: Some(-9999.0),
        ..Default::default()
    };
    GeoTiffWriter::write_grid::<f32, _>(&dem_path, &dem_grid, &gt, "", &options)
        .expect("Failed to write DEM");

    let dem = RasterReader::read(&dem_path).expect("Failed to read DEM");
    assert!(dem.data[[1, 0]].is_nan());

    let mask = array![[0.0_f32, 1.0], [0.0, 0.0]];
    StreamBurner::standard()
        .burn_to_file(&dem, &mask, &burned_path)
        .expect("Failed to burn stream");

    let burned = RasterReader::read(&burned_path).expect("Failed to read burned DEM");

    // river cell lowered, other valid cells untouched
    assert_eq!(burned.data[[0, 0]], 10.0);
    assert_eq!(burned.data[[0, 1]], -500.0);
    assert_eq!(burned.data[[1, 1]], 40.0);

    // the missing cell went out as -9999 and comes back masked again
    assert_eq!(burned.no_data, Some(-9999.0));
    assert!(burned.data[[1, 0]].is_nan());

    // co-registered with the input DEM
    assert_eq!(burned.geo_transform, dem.geo_transform);
    assert_eq!(burned.width(), dem.width());
    assert_eq!(burned.height(), dem.height());
}

#[test]
fn test_burn_preserves_integer_band_type() {
    init_logging();

    let dir = TempDir::new().expect("Failed to create temp dir");
    let dem_path = dir.path().join("dem_i16.tif");
    let burned_path = dir.path().join("dem_i16_streamburn1.tif");

    let dem_grid = array![[100.0_f32, 200.0], [300.0, 400.0]];
    let gt = GeoTransform::north_up(0.0, 60.0, 30.0, -30.0);
    let options = GeoTiffOptions {
        no_data: Some(-9999.0),
        ..Default::default()
    };
    GeoTiffWriter::write_grid::<i16, _>(&dem_path, &dem_grid, &gt, "", &options)
        .expect("Failed to write Int16 DEM");

    let dem = RasterReader::read(&dem_path).expect("Failed to read DEM");
    assert_eq!(dem.band_type, gdal::raster::GdalDataType::Int16);

    let mask = array![[1.0_f32, 0.0], [0.0, 0.0]];
    StreamBurner::standard()
        .burn_to_file(&dem, &mask, &burned_path)
        .expect("Failed to burn stream");

    let burned = RasterReader::read(&burned_path).expect("Failed to read burned DEM");

    assert_eq!(burned.band_type, gdal::raster::GdalDataType::Int16);
    assert_eq!(burned.data[[0, 0]], -500.0);
    assert_eq!(burned.data[[1, 1]], 400.0);
}
