use std::f64::consts::PI;

/// Side length of a raster map tile in pixels
pub const TILE_SIZE: f64 = 256.0;

/// Ground resolution at the equator for zoom 0, in metres per pixel
const EQUATOR_METERS_PER_PIXEL: f64 = 156_543.033_92;

/// Web Mercator cannot represent the poles
const MAX_LATITUDE: f64 = 85.051_128_78;

const TILE_SUBDOMAINS: [&str; 3] = ["a", "b", "c"];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Position in world pixels (Web Mercator) at the given zoom
    pub fn world_pixel(&self, zoom: u8) -> (f64, f64) {
        let scale = TILE_SIZE * f64::from(1u32 << zoom.min(22));
        let lat = self.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();

        let x = (self.lng + 180.0) / 360.0 * scale;
        let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / PI) / 2.0 * scale;
        (x, y)
    }

    /// Ground distance covered by one pixel at this latitude
    pub fn meters_per_pixel(&self, zoom: u8) -> f64 {
        EQUATOR_METERS_PER_PIXEL * self.lat.to_radians().cos() / f64::from(1u32 << zoom.min(22))
    }

    /// On-screen length of a ground distance around this point
    pub fn meters_to_pixels(&self, meters: f64, zoom: u8) -> f64 {
        meters / self.meters_per_pixel(zoom)
    }
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4}, {:.4}", self.lat, self.lng)
    }
}

/// A tile placed inside a viewport, offsets relative to its top-left corner
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedTile {
    pub x: u32,
    pub y: u32,
    pub zoom: u8,
    pub left: f64,
    pub top: f64,
}

impl PlacedTile {
    pub fn url(&self) -> String {
        let subdomain = TILE_SUBDOMAINS[((self.x + self.y) % 3) as usize];
        format!(
            "https://{subdomain}.tile.openstreetmap.org/{}/{}/{}.png",
            self.zoom, self.x, self.y
        )
    }
}

/// Tiles needed to fill a `width` x `height` viewport centered on `center`.
/// Columns wrap around the antimeridian; rows outside the map are skipped.
pub fn visible_tiles(center: Coordinates, zoom: u8, width: f64, height: f64) -> Vec<PlacedTile> {
    if width <= 0.0 || height <= 0.0 {
        return Vec::new();
    }

    let zoom = zoom.min(22);
    let tiles_per_side = 1i64 << zoom;
    let (cx, cy) = center.world_pixel(zoom);
    let origin_x = cx - width / 2.0;
    let origin_y = cy - height / 2.0;

    #[allow(clippy::cast_possible_truncation)]
    let (first_col, last_col, first_row, last_row) = (
        (origin_x / TILE_SIZE).floor() as i64,
        ((origin_x + width - 1.0) / TILE_SIZE).floor() as i64,
        (origin_y / TILE_SIZE).floor() as i64,
        ((origin_y + height - 1.0) / TILE_SIZE).floor() as i64,
    );

    let mut tiles = Vec::new();
    for row in first_row..=last_row {
        if row < 0 || row >= tiles_per_side {
            continue;
        }
        for col in first_col..=last_col {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            tiles.push(PlacedTile {
                x: col.rem_euclid(tiles_per_side) as u32,
                y: row as u32,
                zoom,
                left: col as f64 * TILE_SIZE - origin_x,
                top: row as f64 * TILE_SIZE - origin_y,
            });
        }
    }
    tiles
}
