use relief_types::{Heightmap, Triangle, Vertex};

/// Stream the relief surface as triangles, two per grid cell.
///
/// Rows are visited top to bottom (`y` outer) and cells left to right
/// (`x` inner). Each cell yields `(x,y)-(x+1,y)-(x,y+1)` followed by
/// `(x+1,y)-(x+1,y+1)-(x,y+1)`. Grids narrower or shorter than 2 yield
/// nothing.
pub fn relief_triangles(
    heightmap: &Heightmap,
    depth_scale: f32,
    grid_scale: f32,
) -> impl Iterator<Item = Triangle> + '_ {
    let cols = heightmap.width().saturating_sub(1);
    let rows = heightmap.height().saturating_sub(1);

    let vertex = move |x: usize, y: usize| {
        Vertex::new(
            x as f32 * grid_scale,
            y as f32 * grid_scale,
            heightmap.get(x, y) * depth_scale,
        )
    };

    (0..rows).flat_map(move |y| {
        (0..cols).flat_map(move |x| {
            let p00 = vertex(x, y);
            let p10 = vertex(x + 1, y);
            let p01 = vertex(x, y + 1);
            let p11 = vertex(x + 1, y + 1);
            [Triangle::new(p00, p10, p01), Triangle::new(p10, p11, p01)]
        })
    })
}
