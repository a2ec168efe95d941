//! Pin/check-aware legal move generation.
//!
//! Replaces the teacher's `execute::generate_legal`, which filtered
//! pseudo-legal moves one at a time by making and unmaking each on the real
//! board. This generator computes check/pin state once per position
//! (`attack_analysis::calculate_attack_data`) and masks each piece's
//! pseudo-legal targets against it directly, the approach
//! `moveGenerator.py::generate_moves` uses.
use crate::board::{Board, Color, Piece};
use crate::moves::attack_analysis::{self, AttackData};
use crate::moves::magic::MagicTables;
use crate::moves::movegen;
use crate::moves::types::{Move, MoveBuffer};
use crate::tables::Tables;

/// Generates every legal move for `board.side_to_move` into `moves`.
/// `scratch` is reused across calls to avoid allocating a pseudo-legal
/// buffer per call, mirroring `execute::generate_legal`'s buffer reuse.
pub fn generate_legal(
    board: &Board,
    tables: &MagicTables,
    moves: &mut impl MoveBuffer,
    scratch: &mut impl MoveBuffer,
) {
    moves.clear();
    let data = attack_analysis::calculate_attack_data(board, tables);

    // King moves are always generated: they're the only legal moves in double check.
    scratch.clear();
    movegen::generate_king_moves(board, tables, scratch);
    for mv in scratch.iter().copied() {
        if mv.is_castling() {
            // Castling legality (king not in/through/into check) is already
            // enforced by `is_legal_castling` inside `generate_king_moves`.
            moves.push(mv);
            continue;
        }
        if data.opponent_attack_map & (1u64 << mv.to.index()) == 0 {
            moves.push(mv);
        }
    }

    if data.in_double_check {
        return;
    }

    scratch.clear();
    movegen::generate_pawn_moves(board, scratch);
    movegen::generate_knight_moves(board, scratch);
    movegen::generate_bishop_moves(board, &tables.bishop, scratch);
    movegen::generate_rook_moves(board, &tables.rook, scratch);
    movegen::generate_queen_moves(board, tables, scratch);

    let king_sq = board.king_square(board.side_to_move).index() as usize;
    let t = Tables::get();

    for mv in scratch.iter().copied() {
        let from = mv.from.index() as usize;
        let to_bit = 1u64 << mv.to.index();

        let pin_ok = if data.pin_rays & (1u64 << from) != 0 {
            t.align_mask[king_sq][from] & to_bit != 0
        } else {
            true
        };
        if !pin_ok {
            continue;
        }

        if mv.is_en_passant() {
            let color = board.side_to_move;
            let captured_sq = if color == Color::White {
                mv.to.index() as usize - 8
            } else {
                mv.to.index() as usize + 8
            };
            let addresses_check = data.check_ray_bitmask & (to_bit | (1u64 << captured_sq)) != 0;
            if addresses_check && is_legal_en_passant(board, mv, tables) {
                moves.push(mv);
            }
            continue;
        }

        if data.check_ray_bitmask & to_bit != 0 {
            moves.push(mv);
        }
    }
}

/// En passant can uncover a discovered check along the capturing pawn's
/// rank (both the capturing pawn and the captured pawn vacate a square on
/// the same rank as the king). `pin_rays`/`check_ray_bitmask` don't model
/// this two-square vacancy, so it needs its own test: remove both pawns and
/// the mover's start square from the blocker set, add the destination
/// square back, and check whether an enemy orthogonal slider now attacks
/// the king. Grounded on `moveGenerator.py::_in_check_after_en_passant`.
fn is_legal_en_passant(board: &Board, mv: Move, tables: &MagicTables) -> bool {
    let color = board.side_to_move;
    let king_sq = board.king_square(color).index() as usize;
    let from = mv.from.index() as usize;
    let to = mv.to.index() as usize;
    let captured_sq = if color == Color::White { to - 8 } else { to + 8 };

    let masked_blockers =
        board.occupied() ^ ((1u64 << captured_sq) | (1u64 << from) | (1u64 << to));

    let enemy = color.opposite();
    let enemy_orthogonal = board.pieces(Piece::Rook, enemy) | board.pieces(Piece::Queen, enemy);
    if tables.rook.get_attacks(king_sq, masked_blockers) & enemy_orthogonal != 0 {
        return false;
    }

    let enemy_diagonal = board.pieces(Piece::Bishop, enemy) | board.pieces(Piece::Queen, enemy);
    if tables.bishop.get_attacks(king_sq, masked_blockers) & enemy_diagonal != 0 {
        return false;
    }

    true
}

/// Re-export for callers that only need the check/pin snapshot (e.g. to
/// decide stalemate vs. checkmate without regenerating moves).
pub fn attack_data(board: &Board, tables: &MagicTables) -> AttackData {
    attack_analysis::calculate_attack_data(board, tables)
}
