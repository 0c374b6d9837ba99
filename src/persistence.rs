//! Saving and exporting puzzle solutions.
//!
//! Solutions are exported in the relational shape the surrounding
//! application persists: pieces with their canonical 0/1 matrices, and per
//! solution one record per placed piece carrying the rotation as a fraction
//! of a full turn (0, 0.25, 0.5, 0.75), the two flip flags, and the covered
//! cells as `[x, y]` pairs. A human-readable text dump is written alongside
//! the JSON.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};

use serde::{Deserialize, Serialize};

use crate::board::BoardDims;
use crate::pieces::{PieceId, PieceSet};
use crate::solver::Solution;

const SOLUTIONS_JSON: &str = "solutions.json";
const SOLUTIONS_TXT: &str = "solutions.txt";

/// A piece's catalog entry: id plus canonical footprint matrix.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PieceRecord {
    pub id: PieceId,
    pub shape: Vec<Vec<u8>>,
}

/// One placed piece of a persisted solution.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolutionPieceRecord {
    pub id: u32,
    pub solution_id: u32,
    pub piece_id: PieceId,
    /// Clockwise rotation in turns: 0, 0.25, 0.5, or 0.75.
    pub rotation: f32,
    pub is_flipped_x: bool,
    pub is_flipped_y: bool,
    pub placed_in_cells: Vec<[usize; 2]>,
}

/// A persisted solution and its placed pieces.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolutionRecord {
    pub id: u32,
    pub pieces: Vec<SolutionPieceRecord>,
}

/// On-disk layout of `solutions.json`.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolutionFile {
    pub board_width: usize,
    pub board_height: usize,
    pub pieces: Vec<PieceRecord>,
    pub solutions: Vec<SolutionRecord>,
}

/// Converts a piece catalog to its persistence records.
pub fn piece_records(pieces: &PieceSet) -> Vec<PieceRecord> {
    pieces
        .pieces()
        .iter()
        .map(|piece| PieceRecord {
            id: piece.id,
            shape: piece.shape.to_matrix(),
        })
        .collect()
}

/// Converts discovered solutions to persistence records.
///
/// Solution ids are 1-based in discovery order; piece-record ids are unique
/// across the whole export.
pub fn solution_records(solutions: &[Solution]) -> Vec<SolutionRecord> {
    let mut next_piece_record_id = 1u32;

    solutions
        .iter()
        .enumerate()
        .map(|(index, solution)| {
            let solution_id = (index + 1) as u32;
            let pieces = solution
                .placements
                .iter()
                .map(|placement| {
                    let record = SolutionPieceRecord {
                        id: next_piece_record_id,
                        solution_id,
                        piece_id: placement.piece_id,
                        rotation: f32::from(placement.orientation.quarter_turns) * 0.25,
                        is_flipped_x: placement.orientation.flip_x,
                        is_flipped_y: placement.orientation.flip_y,
                        placed_in_cells: placement.cells.iter().map(|&(x, y)| [x, y]).collect(),
                    };
                    next_piece_record_id += 1;
                    record
                })
                .collect();
            SolutionRecord {
                id: solution_id,
                pieces,
            }
        })
        .collect()
}

/// Saves solutions to both JSON and text files in the working directory.
pub fn save(pieces: &PieceSet, dims: BoardDims, solutions: &[Solution]) -> io::Result<()> {
    save_text(pieces, dims, solutions)?;
    save_json(pieces, dims, solutions)?;
    Ok(())
}

fn save_json(pieces: &PieceSet, dims: BoardDims, solutions: &[Solution]) -> io::Result<()> {
    let file = SolutionFile {
        board_width: dims.width,
        board_height: dims.height,
        pieces: piece_records(pieces),
        solutions: solution_records(solutions),
    };
    let writer = BufWriter::new(File::create(SOLUTIONS_JSON)?);
    serde_json::to_writer_pretty(writer, &file).map_err(io::Error::from)
}

fn save_text(pieces: &PieceSet, dims: BoardDims, solutions: &[Solution]) -> io::Result<()> {
    let mut file = File::create(SOLUTIONS_TXT)?;
    writeln!(file, "Found {} solutions:\n", solutions.len())?;
    for (i, solution) in solutions.iter().enumerate() {
        writeln!(file, "Solution {}:", i + 1)?;
        write!(file, "{}", format_solution(dims, solution, pieces))?;
        writeln!(file)?;
    }
    Ok(())
}

/// Loads all solution records from `solutions.json`.
///
/// Returns `None` if the file is missing or unreadable.
pub fn load_all() -> Option<SolutionFile> {
    let reader = BufReader::new(File::open(SOLUTIONS_JSON).ok()?);
    serde_json::from_reader(reader).ok()
}

/// Returns the number of saved solutions without keeping them in memory.
pub fn count() -> Option<usize> {
    load_all().map(|file| file.solutions.len())
}

/// Renders a solution as a label grid, '.' for empty cells.
///
/// Rows are printed top to bottom (y ascending), matching the board's
/// coordinate convention.
pub fn format_solution(dims: BoardDims, solution: &Solution, pieces: &PieceSet) -> String {
    let mut labels = vec!['.'; dims.cell_count()];

    for placement in &solution.placements {
        let label = pieces
            .get(placement.piece_id)
            .map_or('?', |piece| piece.label);
        for &(x, y) in &placement.cells {
            if x < dims.width && y < dims.height {
                labels[y * dims.width + x] = label;
            }
        }
    }

    let mut output = String::with_capacity(dims.cell_count() + dims.height);
    for y in 0..dims.height {
        for x in 0..dims.width {
            output.push(labels[y * dims.width + x]);
        }
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::solve_all;

    #[test]
    fn test_rotation_is_expressed_in_turns() {
        let pieces = PieceSet::new(vec![crate::pieces::Piece {
            id: 1,
            label: 'I',
            shape: crate::shape::Shape::from_matrix(&[&[1, 1, 1, 1]]).unwrap(),
        }])
        .unwrap();
        let solutions = solve_all(&pieces, BoardDims::new(1, 4)).unwrap();
        let records = solution_records(&solutions);

        assert_eq!(records.len(), 1);
        let piece = &records[0].pieces[0];
        // the only fitting orientation is one quarter turn
        assert_eq!(piece.rotation, 0.25);
        assert!(!piece.is_flipped_x);
        assert!(!piece.is_flipped_y);
        assert_eq!(
            piece.placed_in_cells,
            vec![[0, 0], [0, 1], [0, 2], [0, 3]]
        );
    }

    #[test]
    fn test_record_ids_are_one_based_and_unique() {
        let pieces = PieceSet::new(vec![
            crate::pieces::Piece {
                id: 1,
                label: 'A',
                shape: crate::shape::Shape::from_matrix(&[&[1, 1], &[1, 1]]).unwrap(),
            },
            crate::pieces::Piece {
                id: 2,
                label: 'B',
                shape: crate::shape::Shape::from_matrix(&[&[1, 1], &[1, 1]]).unwrap(),
            },
        ])
        .unwrap();
        let solutions = solve_all(&pieces, BoardDims::new(2, 2)).unwrap();
        let records = solution_records(&solutions);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, 1);
        assert_eq!(records[1].id, 2);
        assert_eq!(records[0].pieces[0].id, 1);
        assert_eq!(records[1].pieces[0].id, 2);
        assert_eq!(records[1].pieces[0].solution_id, 2);
    }

    #[test]
    fn test_json_field_names_match_schema() {
        let record = SolutionPieceRecord {
            id: 1,
            solution_id: 1,
            piece_id: 3,
            rotation: 0.5,
            is_flipped_x: true,
            is_flipped_y: false,
            placed_in_cells: vec![[0, 0], [1, 0]],
        };
        let value = serde_json::to_value(&record).unwrap();
        assert!(value.get("solutionId").is_some());
        assert!(value.get("pieceId").is_some());
        assert!(value.get("isFlippedX").is_some());
        assert!(value.get("isFlippedY").is_some());
        assert!(value.get("placedInCells").is_some());
    }

    #[test]
    fn test_piece_records_carry_canonical_matrices() {
        let records = piece_records(&PieceSet::standard());
        assert_eq!(records.len(), 12);
        assert_eq!(records[1].id, 2);
        assert_eq!(records[1].shape, vec![vec![1, 1, 1, 1, 1]]);
    }

    #[test]
    fn test_format_solution_grid() {
        let pieces = PieceSet::new(vec![crate::pieces::Piece {
            id: 1,
            label: 'O',
            shape: crate::shape::Shape::from_matrix(&[&[1, 1], &[1, 1]]).unwrap(),
        }])
        .unwrap();
        let solutions = solve_all(&pieces, BoardDims::new(3, 2)).unwrap();
        // 3x2 board cannot be filled by one square alone
        assert!(solutions.is_empty());

        let solutions = solve_all(&pieces, BoardDims::new(2, 2)).unwrap();
        let rendered = format_solution(BoardDims::new(2, 2), &solutions[0], &pieces);
        assert_eq!(rendered, "OO\nOO\n");
    }
}
