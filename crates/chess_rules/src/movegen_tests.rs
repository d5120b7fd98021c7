use super::*;

fn sq(name: &str) -> Position {
    name.parse().unwrap()
}

fn white(kind: PieceKind) -> Piece {
    Piece::new(Color::White, kind)
}

fn black(kind: PieceKind) -> Piece {
    Piece::new(Color::Black, kind)
}

fn sorted(mut v: Vec<Position>) -> Vec<Position> {
    v.sort_by_key(|p| (p.row(), p.col()));
    v
}

#[test]
fn test_pawn_single_and_double_push() {
    let b = Board::startpos();
    let moves = pseudo_legal_moves(&b, sq("e2"), white(PieceKind::Pawn), CastlingMode::Excluded, None);
    assert_eq!(sorted(moves), sorted(vec![sq("e3"), sq("e4")]));

    let moves = pseudo_legal_moves(&b, sq("d7"), black(PieceKind::Pawn), CastlingMode::Excluded, None);
    assert_eq!(sorted(moves), sorted(vec![sq("d6"), sq("d5")]));
}

#[test]
fn test_pawn_blocked() {
    // a piece directly ahead stops both pushes
    let b = Board::startpos().with(sq("e3"), black(PieceKind::Knight));
    let moves = pseudo_legal_moves(&b, sq("e2"), white(PieceKind::Pawn), CastlingMode::Excluded, None);
    assert!(moves.is_empty());

    // a piece two ahead stops only the double push
    let b = Board::startpos().with(sq("e4"), black(PieceKind::Knight));
    let moves = pseudo_legal_moves(&b, sq("e2"), white(PieceKind::Pawn), CastlingMode::Excluded, None);
    assert_eq!(moves, vec![sq("e3")]);
}

#[test]
fn test_pawn_captures_only_enemies() {
    let b = Board::empty()
        .with(sq("e4"), white(PieceKind::Pawn))
        .with(sq("d5"), black(PieceKind::Rook))
        .with(sq("f5"), white(PieceKind::Rook));
    let moves = pseudo_legal_moves(&b, sq("e4"), white(PieceKind::Pawn), CastlingMode::Excluded, None);
    assert_eq!(sorted(moves), sorted(vec![sq("e5"), sq("d5")]));
}

#[test]
fn test_en_passant_after_double_push() {
    let b = Board::empty()
        .with(sq("e5"), white(PieceKind::Pawn))
        .with(sq("d5"), black(PieceKind::Pawn));
    let last = LastMove {
        from: sq("d7"),
        to: sq("d5"),
        piece: black(PieceKind::Pawn),
    };
    let moves = pseudo_legal_moves(
        &b,
        sq("e5"),
        white(PieceKind::Pawn),
        CastlingMode::Excluded,
        Some(&last),
    );
    assert!(moves.contains(&sq("d6")));
    assert!(moves.contains(&sq("e6")));
}

#[test]
fn test_no_en_passant_without_double_push() {
    let b = Board::empty()
        .with(sq("e5"), white(PieceKind::Pawn))
        .with(sq("d5"), black(PieceKind::Pawn));
    let last = LastMove {
        from: sq("d6"),
        to: sq("d5"),
        piece: black(PieceKind::Pawn),
    };
    let moves = pseudo_legal_moves(
        &b,
        sq("e5"),
        white(PieceKind::Pawn),
        CastlingMode::Excluded,
        Some(&last),
    );
    assert!(!moves.contains(&sq("d6")));
}

#[test]
fn test_no_en_passant_for_non_adjacent_file() {
    let b = Board::empty()
        .with(sq("e5"), white(PieceKind::Pawn))
        .with(sq("b5"), black(PieceKind::Pawn));
    let last = LastMove {
        from: sq("b7"),
        to: sq("b5"),
        piece: black(PieceKind::Pawn),
    };
    let moves = pseudo_legal_moves(
        &b,
        sq("e5"),
        white(PieceKind::Pawn),
        CastlingMode::Excluded,
        Some(&last),
    );
    assert_eq!(moves, vec![sq("e6")]);
}

#[test]
fn test_knight_moves() {
    let b = Board::empty().with(sq("e4"), white(PieceKind::Knight));
    let moves = pseudo_legal_moves(&b, sq("e4"), white(PieceKind::Knight), CastlingMode::Excluded, None);
    assert_eq!(moves.len(), 8);

    let b = Board::startpos();
    let moves = pseudo_legal_moves(&b, sq("g1"), white(PieceKind::Knight), CastlingMode::Excluded, None);
    assert_eq!(sorted(moves), sorted(vec![sq("f3"), sq("h3")]));
}

#[test]
fn test_slider_rays_stop_on_pieces() {
    let b = Board::empty()
        .with(sq("a1"), white(PieceKind::Rook))
        .with(sq("a4"), black(PieceKind::Pawn))
        .with(sq("d1"), white(PieceKind::Knight));
    let moves = pseudo_legal_moves(&b, sq("a1"), white(PieceKind::Rook), CastlingMode::Excluded, None);
    assert_eq!(
        sorted(moves),
        sorted(vec![sq("a2"), sq("a3"), sq("a4"), sq("b1"), sq("c1")])
    );
}

#[test]
fn test_queen_on_empty_board() {
    let b = Board::empty().with(sq("d4"), white(PieceKind::Queen));
    let moves = pseudo_legal_moves(&b, sq("d4"), white(PieceKind::Queen), CastlingMode::Excluded, None);
    assert_eq!(moves.len(), 27);

    let b = Board::empty().with(sq("d4"), black(PieceKind::Bishop));
    let moves = pseudo_legal_moves(&b, sq("d4"), black(PieceKind::Bishop), CastlingMode::Excluded, None);
    assert_eq!(moves.len(), 13);
}

#[test]
fn test_castling_both_sides() {
    let rights = CastlingRights::all();
    let b = Board::empty()
        .with(sq("e1"), white(PieceKind::King))
        .with(sq("h1"), white(PieceKind::Rook))
        .with(sq("a1"), white(PieceKind::Rook));
    let moves = pseudo_legal_moves(
        &b,
        sq("e1"),
        white(PieceKind::King),
        CastlingMode::Allowed(&rights),
        None,
    );
    assert!(moves.contains(&sq("g1")));
    assert!(moves.contains(&sq("c1")));

    // not without rights, not in attack-probing mode
    let moves = pseudo_legal_moves(&b, sq("e1"), white(PieceKind::King), CastlingMode::Excluded, None);
    assert!(!moves.contains(&sq("g1")));
    let none = CastlingRights::none();
    let moves = pseudo_legal_moves(
        &b,
        sq("e1"),
        white(PieceKind::King),
        CastlingMode::Allowed(&none),
        None,
    );
    assert!(!moves.contains(&sq("g1")));
    assert!(!moves.contains(&sq("c1")));
}

#[test]
fn test_castling_blocked_or_rook_missing() {
    let rights = CastlingRights::all();
    let b = Board::empty()
        .with(sq("e8"), black(PieceKind::King))
        .with(sq("h8"), black(PieceKind::Rook))
        .with(sq("a8"), black(PieceKind::Rook))
        .with(sq("b8"), black(PieceKind::Knight));
    let moves = pseudo_legal_moves(
        &b,
        sq("e8"),
        black(PieceKind::King),
        CastlingMode::Allowed(&rights),
        None,
    );
    assert!(moves.contains(&sq("g8")));
    assert!(!moves.contains(&sq("c8")));

    // an enemy rook on the corner is not a castling partner
    let b = Board::empty()
        .with(sq("e8"), black(PieceKind::King))
        .with(sq("h8"), white(PieceKind::Rook));
    let moves = pseudo_legal_moves(
        &b,
        sq("e8"),
        black(PieceKind::King),
        CastlingMode::Allowed(&rights),
        None,
    );
    assert!(!moves.contains(&sq("g8")));
}

#[test]
fn test_destinations_never_own_occupied() {
    let b = Board::startpos();
    for (from, pc) in b.pieces() {
        let rights = CastlingRights::all();
        for to in pseudo_legal_moves(&b, from, pc, CastlingMode::Allowed(&rights), None) {
            assert!(
                !matches!(b.piece_at(to), Some(other) if other.color == pc.color),
                "{pc:?} on {from} lands on own piece at {to}"
            );
        }
    }
}
