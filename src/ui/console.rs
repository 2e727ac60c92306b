use crate::game::{GameOutcome, Seat, Symbol};

/// Greeting printed before a console game.
pub fn welcome_message(run_length: usize, seats: &[Seat]) -> String {
    let mut text = format!("Welcome to Connect {run_length}\n");
    text.push_str(&format!("There are {} players\n", seats.len()));
    for (i, seat) in seats.iter().enumerate() {
        text.push_str(&format!(
            "Player {} is {} ({})\n",
            i + 1,
            seat.symbol.name(),
            seat.agent.name()
        ));
    }
    text.push_str(
        "To play the game type in the number of the column you want to drop your counter in\n",
    );
    text.push_str(&format!(
        "A player wins by connecting {run_length} counters in a row - vertically, horizontally or diagonally\n"
    ));
    text
}

/// Final line of a console game, told from `human`'s side when someone is
/// playing at the keyboard.
pub fn game_over_message(outcome: GameOutcome, human: Option<Symbol>) -> String {
    match (outcome, human) {
        (GameOutcome::Draw, Some(_)) => "Game Over! You Have Drawn!!!".to_string(),
        (GameOutcome::Winner(w), Some(h)) if w == h => "Game Over! You Have Won!!!".to_string(),
        (GameOutcome::Winner(_), Some(_)) => "Game Over! You Have Lost!!!".to_string(),
        (GameOutcome::Draw, None) => "Game Over! It's a draw!!!".to_string(),
        (GameOutcome::Winner(w), None) => format!("Game Over! {} Has Won!!!", w.name()),
    }
}
