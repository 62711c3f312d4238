#![allow(dead_code)]
use ale_topology::prelude::*;

pub fn pid(u: u64) -> PointId {
    PointId::new(u).unwrap()
}

/// Structured 2D grid of `nx * ny` unit quads; vertex `(i, j)` is at `v[j * (nx + 1) + i]`.
pub struct Grid2 {
    pub mesh: MeshTopology,
    pub vertices: Vec<PointId>,
    pub nx: usize,
    pub ny: usize,
}

impl Grid2 {
    pub fn vertex(&self, i: usize, j: usize) -> PointId {
        self.vertices[j * (self.nx + 1) + i]
    }
}

fn grid_vertices(mesh: &mut MeshTopology, nx: usize, ny: usize) -> Vec<PointId> {
    let mut vertices = Vec::with_capacity((nx + 1) * (ny + 1));
    for j in 0..=ny {
        for i in 0..=nx {
            vertices.push(mesh.add_vertex(&[i as f64, j as f64]).unwrap());
        }
    }
    vertices
}

/// Quadrilateral grid, not yet initialized.
pub fn quad_grid(nx: usize, ny: usize) -> Grid2 {
    let mut mesh = MeshTopology::new(MeshConfig::two_d()).unwrap();
    let vertices = grid_vertices(&mut mesh, nx, ny);
    let v = |i: usize, j: usize| vertices[j * (nx + 1) + i];
    for j in 0..ny {
        for i in 0..nx {
            mesh.add_cell(
                ShapeTag::Quadrilateral,
                &[v(i, j), v(i + 1, j), v(i + 1, j + 1), v(i, j + 1)],
            )
            .unwrap();
        }
    }
    Grid2 {
        mesh,
        vertices,
        nx,
        ny,
    }
}

/// Grid with every quad split into two counter-clockwise triangles.
/// `flip(i, j)` selects the other diagonal for quad `(i, j)`.
pub fn triangle_grid(nx: usize, ny: usize, flip: impl Fn(usize, usize) -> bool) -> Grid2 {
    let mut mesh = MeshTopology::new(MeshConfig::two_d()).unwrap();
    let vertices = grid_vertices(&mut mesh, nx, ny);
    let v = |i: usize, j: usize| vertices[j * (nx + 1) + i];
    for j in 0..ny {
        for i in 0..nx {
            let (a, b, c, d) = (v(i, j), v(i + 1, j), v(i + 1, j + 1), v(i, j + 1));
            let halves = if flip(i, j) {
                [[a, b, d], [b, c, d]]
            } else {
                [[a, b, c], [a, c, d]]
            };
            for tri in halves {
                mesh.add_cell(ShapeTag::Triangle, &tri).unwrap();
            }
        }
    }
    Grid2 {
        mesh,
        vertices,
        nx,
        ny,
    }
}

/// Structured 3D grid of `n[0] * n[1] * n[2]` hexahedra with positions
/// mapped through `map`, not yet initialized.
pub fn hex_grid(n: [usize; 3], map: impl Fn([f64; 3]) -> [f64; 3]) -> (MeshTopology, Vec<PointId>) {
    let mut mesh = MeshTopology::new(MeshConfig::three_d()).unwrap();
    let [nx, ny, nz] = n;
    let mut vertices = Vec::new();
    for k in 0..=nz {
        for j in 0..=ny {
            for i in 0..=nx {
                let x = map([i as f64, j as f64, k as f64]);
                vertices.push(mesh.add_vertex(&x).unwrap());
            }
        }
    }
    let v = |i: usize, j: usize, k: usize| vertices[(k * (ny + 1) + j) * (nx + 1) + i];
    for k in 0..nz {
        for j in 0..ny {
            for i in 0..nx {
                mesh.add_cell(
                    ShapeTag::Hexahedron,
                    &[
                        v(i, j, k),
                        v(i + 1, j, k),
                        v(i + 1, j + 1, k),
                        v(i, j + 1, k),
                        v(i, j, k + 1),
                        v(i + 1, j, k + 1),
                        v(i + 1, j + 1, k + 1),
                        v(i, j + 1, k + 1),
                    ],
                )
                .unwrap();
            }
        }
    }
    (mesh, vertices)
}

/// Two positively oriented tetrahedra sharing the face `{a, b, c}`.
pub fn two_tets() -> MeshTopology {
    let mut mesh = MeshTopology::new(MeshConfig::three_d()).unwrap();
    let a = mesh.add_vertex(&[0.0, 0.0, 0.0]).unwrap();
    let b = mesh.add_vertex(&[1.0, 0.0, 0.0]).unwrap();
    let c = mesh.add_vertex(&[0.0, 1.0, 0.0]).unwrap();
    let d = mesh.add_vertex(&[0.0, 0.0, 1.0]).unwrap();
    let e = mesh.add_vertex(&[0.0, 0.0, -1.0]).unwrap();
    mesh.add_cell(ShapeTag::Tetrahedron, &[a, b, c, d]).unwrap();
    mesh.add_cell(ShapeTag::Tetrahedron, &[a, c, b, e]).unwrap();
    mesh
}

/// Sum of cell measures through the cell views.
pub fn total_measure(mesh: &MeshTopology) -> f64 {
    mesh.cells()
        .iter()
        .map(|&c| mesh.cell(c).unwrap().measure().unwrap())
        .sum()
}

/// Sum of corner measures over the whole mesh.
pub fn total_corner_measure(mesh: &MeshTopology) -> f64 {
    mesh.corners()
        .iter()
        .map(|&c| mesh.corner_measure(c).unwrap())
        .sum()
}

pub fn assert_close(got: f64, want: f64) {
    assert!(
        (got - want).abs() <= 1e-12 * want.abs().max(1.0),
        "got {got}, want {want}"
    );
}
