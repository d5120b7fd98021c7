use super::*;

fn p(row: u8, col: u8) -> Position {
    Position::new(row, col).unwrap()
}

#[test]
fn test_startpos_layout() {
    let b = Board::startpos();
    assert_eq!(
        b.piece_at(p(7, 4)),
        Some(Piece::new(Color::White, PieceKind::King))
    );
    assert_eq!(
        b.piece_at(p(0, 3)),
        Some(Piece::new(Color::Black, PieceKind::Queen))
    );
    assert_eq!(b.pieces().count(), 32);
    assert_eq!(b.king_position(Color::White), Some(p(7, 4)));
    assert_eq!(b.king_position(Color::Black), Some(p(0, 4)));
}

#[test]
fn test_king_position_missing() {
    assert_eq!(Board::empty().king_position(Color::White), None);
}

#[test]
fn test_display_diagram() {
    let text = Board::startpos().to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "8  r n b q k b n r");
    assert_eq!(lines[7], "1  R N B Q K B N R");
    assert_eq!(lines[8], "   a b c d e f g h");
}

#[test]
fn test_apply_castle_moves_rook() {
    let wk = Piece::new(Color::White, PieceKind::King);
    let wr = Piece::new(Color::White, PieceKind::Rook);
    let mut b = Board::empty()
        .with(p(7, 4), wk)
        .with(p(7, 7), wr)
        .with(p(7, 0), wr);

    b.apply_move(p(7, 4), p(7, 6), None);
    assert_eq!(b.piece_at(p(7, 6)), Some(wk));
    assert_eq!(b.piece_at(p(7, 5)), Some(wr));
    assert_eq!(b.piece_at(p(7, 7)), None);
    // queen-side rook untouched
    assert_eq!(b.piece_at(p(7, 0)), Some(wr));
}

#[test]
fn test_apply_en_passant_removes_victim() {
    let wp = Piece::new(Color::White, PieceKind::Pawn);
    let bp = Piece::new(Color::Black, PieceKind::Pawn);
    let mut b = Board::empty().with(p(3, 4), wp).with(p(3, 3), bp);

    let captured = b.apply_move(p(3, 4), p(2, 3), None);
    assert_eq!(captured, Some(bp));
    assert_eq!(b.piece_at(p(2, 3)), Some(wp));
    assert_eq!(b.piece_at(p(3, 3)), None);
    assert_eq!(b.piece_at(p(3, 4)), None);
}

#[test]
fn test_apply_promotion() {
    let wp = Piece::new(Color::White, PieceKind::Pawn);
    let br = Piece::new(Color::Black, PieceKind::Rook);
    let mut b = Board::empty().with(p(1, 4), wp).with(p(0, 3), br);

    let captured = b.apply_move(p(1, 4), p(0, 3), Some(PieceKind::Knight));
    assert_eq!(captured, Some(br));
    assert_eq!(
        b.piece_at(p(0, 3)),
        Some(Piece::new(Color::White, PieceKind::Knight))
    );
}

#[test]
fn test_apply_from_empty_square_is_noop() {
    let mut b = Board::startpos();
    let before = b;
    assert_eq!(b.apply_move(p(4, 4), p(3, 4), None), None);
    assert_eq!(b, before);
}

#[test]
fn test_simulate_leaves_original_untouched() {
    let b = Board::startpos();
    let wk = Piece::new(Color::White, PieceKind::King);
    let scratch = b.simulate(p(6, 4), p(4, 4), Piece::new(Color::White, PieceKind::Pawn));
    assert!(scratch.is_empty_at(p(6, 4)));
    assert!(!b.is_empty_at(p(6, 4)));

    // castling is simulated as a bare king move
    let castle_board = Board::empty()
        .with(p(7, 4), wk)
        .with(p(7, 7), Piece::new(Color::White, PieceKind::Rook));
    let scratch = castle_board.simulate(p(7, 4), p(7, 6), wk);
    assert_eq!(scratch.piece_at(p(7, 6)), Some(wk));
    assert!(scratch.piece_at(p(7, 7)).is_some());
}

#[test]
fn test_castling_rights_update() {
    let mut rights = CastlingRights::all();
    let wr = Piece::new(Color::White, PieceKind::Rook);

    // a rook off its home row changes nothing
    rights.update_after_move(wr, p(4, 7));
    assert_eq!(rights, CastlingRights::all());

    rights.update_after_move(wr, p(7, 7));
    assert!(!rights.white.king_side);
    assert!(rights.white.queen_side);
    assert_eq!(rights.black, CastlingRights::all().black);

    rights.update_after_move(Piece::new(Color::Black, PieceKind::King), p(0, 4));
    assert!(!rights.black.king_side);
    assert!(!rights.black.queen_side);
    assert!(rights.white.queen_side);
}

#[test]
fn test_double_pawn_push() {
    let bp = Piece::new(Color::Black, PieceKind::Pawn);
    let lm = LastMove {
        from: p(1, 3),
        to: p(3, 3),
        piece: bp,
    };
    assert!(lm.is_double_pawn_push());
    let single = LastMove { to: p(2, 3), ..lm };
    assert!(!single.is_double_pawn_push());
}
