//! The standard board: a hexagon of side three on a triangular lattice.
//!
//! 37 vertices in seven rows (4, 5, 6, 7, 6, 5, 4 from top to bottom), 90
//! edges and 54 triangular faces. Coordinates are in unit space: the board's
//! corners lie on the unit circle, `y` grows upward.

const SQRT3_6: f64 = 0.288_675_134_594_812_9;
const SQRT3_3: f64 = 0.577_350_269_189_625_8;
const SQRT3_2: f64 = 0.866_025_403_784_438_6;

/// Lattice coordinates of every vertex, row by row from the top.
pub const POSITIONS: [(f64, f64); 37] = [
    (-1.0 / 2.0, SQRT3_2),
    (-1.0 / 6.0, SQRT3_2),
    (1.0 / 6.0, SQRT3_2),
    (1.0 / 2.0, SQRT3_2),

    (-2.0 / 3.0, SQRT3_3),
    (-1.0 / 3.0, SQRT3_3),
    (0.0, SQRT3_3),
    (1.0 / 3.0, SQRT3_3),
    (2.0 / 3.0, SQRT3_3),

    (-5.0 / 6.0, SQRT3_6),
    (-1.0 / 2.0, SQRT3_6),
    (-1.0 / 6.0, SQRT3_6),
    (1.0 / 6.0, SQRT3_6),
    (1.0 / 2.0, SQRT3_6),
    (5.0 / 6.0, SQRT3_6),

    (-1.0, 0.0),
    (-2.0 / 3.0, 0.0),
    (-1.0 / 3.0, 0.0),
    (0.0, 0.0),
    (1.0 / 3.0, 0.0),
    (2.0 / 3.0, 0.0),
    (1.0, 0.0),

    (-5.0 / 6.0, -SQRT3_6),
    (-1.0 / 2.0, -SQRT3_6),
    (-1.0 / 6.0, -SQRT3_6),
    (1.0 / 6.0, -SQRT3_6),
    (1.0 / 2.0, -SQRT3_6),
    (5.0 / 6.0, -SQRT3_6),

    (-2.0 / 3.0, -SQRT3_3),
    (-1.0 / 3.0, -SQRT3_3),
    (0.0, -SQRT3_3),
    (1.0 / 3.0, -SQRT3_3),
    (2.0 / 3.0, -SQRT3_3),

    (-1.0 / 2.0, -SQRT3_2),
    (-1.0 / 6.0, -SQRT3_2),
    (1.0 / 6.0, -SQRT3_2),
    (1.0 / 2.0, -SQRT3_2),
];

/// Directional lines per vertex.
///
/// Each line lists the vertices met walking away from the owning vertex in one
/// lattice direction, nearest first, up to three steps. The last entry of each
/// line is a legal move target.
pub const LINES: [&[[u16; 3]]; 37] = [
    &[[1, 2, 3], [5, 11, 18], [4, 9, 15]],
    &[[5, 10, 16], [6, 12, 19]],
    &[[6, 11, 17], [7, 13, 20]],
    &[[2, 1, 0], [7, 12, 18], [8, 14, 21]],
    &[[5, 6, 7], [10, 17, 24]],
    &[[6, 7, 8], [10, 16, 22], [11, 18, 25]],
    &[[11, 17, 23], [12, 19, 26]],
    &[[6, 5, 4], [12, 18, 24], [13, 20, 27]],
    &[[7, 6, 5], [13, 19, 25]],
    &[[10, 11, 12], [16, 23, 29]],
    &[[11, 12, 13], [17, 24, 30]],
    &[[12, 13, 14], [17, 23, 28], [18, 25, 31]],
    &[[11, 10, 9], [18, 24, 29], [19, 26, 32]],
    &[[12, 11, 10], [19, 25, 30]],
    &[[13, 12, 11], [20, 26, 31]],
    &[[9, 4, 0], [16, 17, 18], [22, 28, 33]],
    &[[10, 5, 1], [17, 18, 19], [23, 29, 34]],
    &[[11, 6, 2], [18, 19, 20], [24, 30, 35]],
    &[[17, 16, 15], [11, 5, 0], [12, 7, 3], [19, 20, 21], [24, 29, 33], [25, 31, 36]],
    &[[18, 17, 16], [12, 6, 1], [25, 30, 34]],
    &[[19, 18, 17], [13, 7, 2], [26, 31, 35]],
    &[[20, 19, 18], [14, 8, 3], [27, 32, 36]],
    &[[23, 24, 25], [16, 10, 5]],
    &[[24, 25, 26], [17, 11, 6]],
    &[[25, 26, 27], [18, 12, 7], [17, 10, 4]],
    &[[24, 23, 22], [18, 11, 5], [19, 13, 8]],
    &[[25, 24, 23], [19, 12, 6]],
    &[[26, 25, 24], [20, 13, 7]],
    &[[29, 30, 31], [23, 17, 11]],
    &[[30, 31, 32], [23, 16, 9], [24, 18, 12]],
    &[[24, 17, 10], [25, 19, 13]],
    &[[30, 29, 28], [25, 18, 11], [26, 20, 14]],
    &[[31, 30, 29], [26, 19, 12]],
    &[[34, 35, 36], [28, 22, 15], [29, 24, 18]],
    &[[29, 23, 16], [30, 25, 19]],
    &[[30, 24, 17], [31, 26, 20]],
    &[[35, 34, 33], [31, 25, 18], [32, 27, 21]],
];

/// Edges as pairs of vertex indices.
pub const EDGES: [[u16; 2]; 90] = [
    [0, 1], [1, 2], [2, 3], [0, 4], [0, 5], [1, 5], [1, 6], [2, 6],
    [2, 7], [3, 7], [3, 8], [4, 5], [5, 6], [6, 7], [7, 8], [4, 9],
    [4, 10], [5, 10], [5, 11], [6, 11], [6, 12], [7, 12], [7, 13], [8, 13],
    [8, 14], [9, 10], [10, 11], [11, 12], [12, 13], [13, 14], [9, 15], [9, 16],
    [10, 16], [10, 17], [11, 17], [11, 18], [12, 18], [12, 19], [13, 19], [13, 20],
    [14, 20], [14, 21], [15, 16], [16, 17], [17, 18], [18, 19], [19, 20], [20, 21],
    [15, 22], [16, 22], [16, 23], [17, 23], [17, 24], [18, 24], [18, 25], [19, 25],
    [19, 26], [20, 26], [20, 27], [21, 27], [22, 23], [23, 24], [24, 25], [25, 26],
    [26, 27], [22, 28], [23, 28], [23, 29], [24, 29], [24, 30], [25, 30], [25, 31],
    [26, 31], [26, 32], [27, 32], [28, 29], [29, 30], [30, 31], [31, 32], [28, 33],
    [29, 33], [29, 34], [30, 34], [30, 35], [31, 35], [31, 36], [32, 36], [33, 34],
    [34, 35], [35, 36],
];

/// Faces as triples of indices into [`EDGES`].
pub const FACES: [[u16; 3]; 54] = [
    [3, 4, 11], [0, 4, 5], [5, 6, 12], [1, 6, 7], [7, 8, 13], [2, 8, 9],
    [9, 10, 14], [15, 16, 25], [11, 16, 17], [17, 18, 26], [12, 18, 19], [19, 20, 27],
    [13, 20, 21], [21, 22, 28], [14, 22, 23], [23, 24, 29], [30, 31, 42], [25, 31, 32],
    [32, 33, 43], [26, 33, 34], [34, 35, 44], [27, 35, 36], [36, 37, 45], [28, 37, 38],
    [38, 39, 46], [29, 39, 40], [40, 41, 47], [42, 48, 49], [49, 50, 60], [43, 50, 51],
    [51, 52, 61], [44, 52, 53], [53, 54, 62], [45, 54, 55], [55, 56, 63], [46, 56, 57],
    [57, 58, 64], [47, 58, 59], [60, 65, 66], [66, 67, 75], [61, 67, 68], [68, 69, 76],
    [62, 69, 70], [70, 71, 77], [63, 71, 72], [72, 73, 78], [64, 73, 74], [75, 79, 80],
    [80, 81, 87], [76, 81, 82], [82, 83, 88], [77, 83, 84], [84, 85, 89], [78, 85, 86],
];
