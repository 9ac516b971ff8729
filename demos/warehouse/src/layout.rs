//! Warehouse floor plan and the agents working on it.
//!
//! Three rows of shelving split the floor into aisles.  Robots wait at the
//! loading dock along the bottom edge and each one is sent to a pick face in
//! an aisle.

use mapf_core::Cell;
use mapf_grid::GridMap;
use mapf_planner::PlanResult;

/// `.` floor, `@` shelving.
pub const FLOOR_PLAN: &str = "
    ............
    .@@@.@@@.@@.
    ............
    .@@@.@@@.@@.
    ............
    .@@@.@@@.@@.
    ............
    ............
";

/// `(dock, pick face)` per robot, in robot id order.
const ROBOTS: [((u32, u32), (u32, u32)); 8] = [
    ((7, 0),  (0, 2)),
    ((7, 2),  (2, 6)),
    ((7, 4),  (4, 10)),
    ((7, 6),  (0, 9)),
    ((7, 8),  (2, 1)),
    ((7, 10), (4, 5)),
    ((6, 11), (0, 0)),
    ((7, 11), (4, 0)),
];

/// Parse the floor plan.
pub fn build_floor() -> PlanResult<GridMap> {
    Ok(GridMap::from_ascii(FLOOR_PLAN)?)
}

/// Robot start and goal cells.
pub fn robots() -> (Vec<Cell>, Vec<Cell>) {
    ROBOTS
        .iter()
        .map(|&(dock, pick)| (Cell::from(dock), Cell::from(pick)))
        .unzip()
}
