use std::io::{self, BufRead, Write};

use anyhow::Result;

use lumi_lib::flashcards::{starter_deck, DeckWalker};

/// Flip through the starter deck: f flips, n/p step, q quits.
pub fn run() -> Result<()> {
    let mut deck = DeckWalker::new(starter_deck())?;
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let (current, total) = deck.position();
        let card = deck.current();
        println!("\nCard {} of {}  [{}]", current, total, card.category);
        if deck.is_flipped() {
            println!("A: {}", card.answer);
        } else {
            println!("Q: {}", card.question);
        }
        print!("  (f)lip / (n)ext / (p)rev / (q)uit: ");
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => return Ok(()),
        };
        match line.trim() {
            "f" => deck.flip(),
            "n" => deck.next(),
            "p" => deck.prev(),
            "q" => return Ok(()),
            other => println!("  Unrecognized answer '{}'", other),
        }
    }
}
