use std::sync::Arc;
use std::time::Duration;

use crate::config::game::{GOLD_MAX, GOLD_MIN};
use crate::game::entities::{Player, Projectile};
use crate::game::grid::{generate_grid, weighted_tile};
use crate::game::store::GridStore;
use crate::game::systems::{ProjectileManager, move_player};
use crate::game::types::{Direction, Position, Tile};

fn pos(x: i32, y: i32) -> Position {
    Position { x, y }
}

/// Border walls around an all-floor interior.
fn open_layout(width: usize, height: usize) -> Vec<Vec<Tile>> {
    (0..width)
        .map(|x| {
            (0..height)
                .map(|y| {
                    if x == 0 || y == 0 || x == width - 1 || y == height - 1 {
                        Tile::Wall
                    } else {
                        Tile::Floor
                    }
                })
                .collect()
        })
        .collect()
}

/// Projectile with a short step delay so tests finish quickly.
fn quick_projectile(origin: Position, direction: Direction, energy: u32) -> Projectile {
    Projectile::new(origin, direction, energy, Duration::from_millis(1))
}

fn count_player_cells(store: &GridStore) -> usize {
    let mut count = 0;
    for x in 0..store.width() as i32 {
        for y in 0..store.height() as i32 {
            if store.tile(pos(x, y)) == Some(Tile::Player) {
                count += 1;
            }
        }
    }
    count
}

fn count_projectile_cells(store: &GridStore) -> usize {
    let mut count = 0;
    for x in 0..store.width() as i32 {
        for y in 0..store.height() as i32 {
            if store.tile(pos(x, y)) == Some(Tile::Projectile) {
                count += 1;
            }
        }
    }
    count
}

#[test]
fn test_border_cells_are_walls() {
    let grid = generate_grid(16, 16);
    for x in 0..16 {
        for y in 0..16 {
            if x == 0 || y == 0 || x == 15 || y == 15 {
                assert_eq!(grid[x][y], Tile::Wall);
            }
        }
    }
}

#[test]
fn test_generated_tiles_are_terrain_only() {
    let grid = generate_grid(16, 16);
    assert!(grid.iter().flatten().all(|t| t.is_terrain()));
}

#[test]
fn test_weighted_tile_distribution() {
    let mut rng = rand::rng();
    let draws = 10_000;
    let mut walls = 0;
    let mut items = 0;
    for _ in 0..draws {
        match weighted_tile(&mut rng) {
            Tile::Wall => walls += 1,
            Tile::Item => items += 1,
            Tile::Floor => {}
            other => panic!("generator produced occupant tile {:?}", other),
        }
    }
    // Wide bounds, this is a sanity check rather than a statistical test.
    let wall_fraction = walls as f64 / draws as f64;
    let item_fraction = items as f64 / draws as f64;
    assert!(wall_fraction > 0.25 && wall_fraction < 0.41);
    assert!(item_fraction > 0.0 && item_fraction < 0.10);
}

#[test]
fn test_spawn_cell_is_floor_under_player() {
    let spawn = pos(4, 1);
    let store = GridStore::new(16, 16, spawn);
    assert_eq!(store.terrain(spawn), Some(Tile::Floor));
    assert_eq!(store.tile(spawn), Some(Tile::Player));
    assert_eq!(count_player_cells(&store), 1);
}

#[test]
#[should_panic]
fn test_degenerate_grid_is_rejected() {
    GridStore::new(2, 5, pos(1, 1));
}

#[test]
fn test_wall_bump_is_rejected() {
    let spawn = pos(1, 1);
    let store = GridStore::from_layout(open_layout(5, 5), spawn);
    let mut player = Player::new(spawn);

    // Up from (1, 1) is the border wall at (1, 0).
    let outcome = move_player(&store, &mut player, Direction::Up);

    assert_eq!(outcome.position, spawn);
    assert!(!outcome.picked_up_item);
    assert_eq!(player.pos, spawn);
    assert_eq!(store.tile(spawn), Some(Tile::Player));
    assert_eq!(store.tile(pos(1, 0)), Some(Tile::Wall));
}

#[test]
fn test_off_grid_move_is_rejected() {
    // Spawn on the border itself (forced to floor) so the candidate cell
    // is off the grid entirely.
    let spawn = pos(0, 1);
    let store = GridStore::from_layout(open_layout(5, 5), spawn);
    let mut player = Player::new(spawn);

    let outcome = move_player(&store, &mut player, Direction::Left);

    assert_eq!(outcome.position, spawn);
    assert_eq!(player.pos, spawn);
    assert_eq!(store.tile(spawn), Some(Tile::Player));
}

#[test]
fn test_item_pickup_is_permanent() {
    let spawn = pos(1, 1);
    let mut layout = open_layout(6, 5);
    layout[2][1] = Tile::Item;
    let store = GridStore::from_layout(layout, spawn);
    let mut player = Player::new(spawn);

    let outcome = move_player(&store, &mut player, Direction::Right);

    assert!(outcome.picked_up_item);
    assert_eq!(player.pos, pos(2, 1));
    assert!((GOLD_MIN..=GOLD_MAX).contains(&player.gold));
    // Terrain mutated: the item is gone for good.
    assert_eq!(store.terrain(pos(2, 1)), Some(Tile::Floor));

    // Leaving the cell reveals floor, not a stale item.
    move_player(&store, &mut player, Direction::Right);
    assert_eq!(store.tile(pos(2, 1)), Some(Tile::Floor));
    assert_eq!(store.tile(pos(3, 1)), Some(Tile::Player));
}

#[test]
fn test_gold_accumulates_across_pickups() {
    let spawn = pos(1, 1);
    let mut layout = open_layout(6, 5);
    layout[2][1] = Tile::Item;
    layout[3][1] = Tile::Item;
    let store = GridStore::from_layout(layout, spawn);
    let mut player = Player::new(spawn);

    move_player(&store, &mut player, Direction::Right);
    move_player(&store, &mut player, Direction::Right);

    assert!((GOLD_MIN * 2..=GOLD_MAX * 2).contains(&player.gold));
}

#[test]
fn test_two_moves_right_across_open_floor() {
    let spawn = pos(1, 1);
    let store = GridStore::from_layout(open_layout(5, 5), spawn);
    let mut player = Player::new(spawn);

    move_player(&store, &mut player, Direction::Right);
    let outcome = move_player(&store, &mut player, Direction::Right);

    assert_eq!(outcome.position, pos(3, 1));
    assert_eq!(store.tile(pos(1, 1)), Some(Tile::Floor));
    assert_eq!(store.tile(pos(2, 1)), Some(Tile::Floor));
    assert_eq!(store.tile(pos(3, 1)), Some(Tile::Player));
    assert_eq!(count_player_cells(&store), 1);
}

#[test]
fn test_regenerate_keeps_player_cell() {
    let spawn = pos(4, 1);
    let store = GridStore::new(16, 16, spawn);

    store.regenerate();

    assert_eq!(store.terrain(spawn), Some(Tile::Floor));
    assert_eq!(store.tile(spawn), Some(Tile::Player));
    assert_eq!(count_player_cells(&store), 1);
    for x in 0..16 {
        assert_eq!(store.tile(pos(x, 0)), Some(Tile::Wall));
        assert_eq!(store.tile(pos(x, 15)), Some(Tile::Wall));
    }
}

#[tokio::test]
async fn test_projectile_destroys_border_wall() {
    let spawn = pos(1, 1);
    let store = Arc::new(GridStore::from_layout(open_layout(5, 5), spawn));
    let projectiles = ProjectileManager::new();

    // One step left from (1, 1) is the border wall at (0, 1).
    projectiles.fire(store.clone(), quick_projectile(spawn, Direction::Left, 4));
    projectiles.join_all().await;

    assert_eq!(store.terrain(pos(0, 1)), Some(Tile::Floor));
    assert_eq!(store.tile(pos(0, 1)), Some(Tile::Floor));
    assert_eq!(store.tile(spawn), Some(Tile::Player));
    assert_eq!(count_projectile_cells(&store), 0);
}

#[tokio::test]
async fn test_projectile_stops_at_interior_wall() {
    let spawn = pos(1, 1);
    let mut layout = open_layout(7, 5);
    layout[3][1] = Tile::Wall;
    let store = Arc::new(GridStore::from_layout(layout, spawn));
    let projectiles = ProjectileManager::new();

    projectiles.fire(store.clone(), quick_projectile(spawn, Direction::Right, 10));
    projectiles.join_all().await;

    // Wall carved down to floor in both layouts, trail cleaned behind it.
    assert_eq!(store.terrain(pos(3, 1)), Some(Tile::Floor));
    assert_eq!(store.tile(pos(3, 1)), Some(Tile::Floor));
    assert_eq!(store.tile(pos(2, 1)), Some(Tile::Floor));
    // The projectile died at the wall: the cell beyond is untouched floor.
    assert_eq!(store.tile(pos(4, 1)), Some(Tile::Floor));
    assert_eq!(count_projectile_cells(&store), 0);
}

#[tokio::test]
async fn test_exhausted_projectile_leaves_no_marker() {
    let spawn = pos(1, 1);
    let store = Arc::new(GridStore::from_layout(open_layout(7, 7), spawn));
    let projectiles = ProjectileManager::new();

    projectiles.fire(store.clone(), quick_projectile(spawn, Direction::Right, 3));
    projectiles.join_all().await;

    assert_eq!(count_projectile_cells(&store), 0);
    assert_eq!(store.tile(pos(2, 1)), Some(Tile::Floor));
    assert_eq!(store.tile(pos(3, 1)), Some(Tile::Floor));
    assert_eq!(store.tile(pos(4, 1)), Some(Tile::Floor));
    assert_eq!(store.tile(spawn), Some(Tile::Player));
}

#[tokio::test]
async fn test_projectile_does_not_consume_items() {
    let spawn = pos(1, 1);
    let mut layout = open_layout(8, 5);
    layout[3][1] = Tile::Item;
    let store = Arc::new(GridStore::from_layout(layout, spawn));
    let projectiles = ProjectileManager::new();

    // Expires at (6, 1) before reaching the border at (7, 1).
    projectiles.fire(store.clone(), quick_projectile(spawn, Direction::Right, 5));
    projectiles.join_all().await;

    assert_eq!(store.terrain(pos(3, 1)), Some(Tile::Item));
    assert_eq!(store.tile(pos(3, 1)), Some(Tile::Item));
    assert_eq!(store.tile(pos(7, 1)), Some(Tile::Wall));
}

#[tokio::test]
async fn test_concurrent_projectiles_preserve_player_marker() {
    let spawn = pos(4, 4);
    let store = Arc::new(GridStore::from_layout(open_layout(9, 9), spawn));
    let projectiles = ProjectileManager::new();

    for direction in [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ] {
        projectiles.fire(store.clone(), quick_projectile(spawn, direction, 10));
    }
    projectiles.join_all().await;
    assert_eq!(projectiles.live_count(), 0);

    // All four border walls in line with the player were destroyed.
    assert_eq!(store.tile(pos(4, 0)), Some(Tile::Floor));
    assert_eq!(store.tile(pos(4, 8)), Some(Tile::Floor));
    assert_eq!(store.tile(pos(0, 4)), Some(Tile::Floor));
    assert_eq!(store.tile(pos(8, 4)), Some(Tile::Floor));
    assert_eq!(count_projectile_cells(&store), 0);
    assert_eq!(count_player_cells(&store), 1);
    assert_eq!(store.tile(spawn), Some(Tile::Player));
}
