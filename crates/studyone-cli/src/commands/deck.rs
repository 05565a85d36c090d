//! Flashcard deck commands.

use clap::Subcommand;
use studyone_core::model::{Card, Deck};
use studyone_core::repo::Repository;
use studyone_core::storage::Store;

#[derive(Subcommand)]
pub enum DeckAction {
    /// Create a deck
    Create {
        /// Deck name
        name: String,
        /// Description
        #[arg(long)]
        description: Option<String>,
    },
    /// List decks with card counts
    List,
    /// Get a deck with its cards
    Get {
        /// Deck ID
        id: String,
    },
    /// Add a card to a deck
    AddCard {
        /// Deck ID
        id: String,
        /// Card front
        front: String,
        /// Card back
        back: String,
    },
    /// Remove a card from a deck
    RemoveCard {
        /// Deck ID
        id: String,
        /// Card ID
        card_id: String,
    },
    /// Delete a deck
    Delete {
        /// Deck ID
        id: String,
    },
}

pub fn run(action: DeckAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = Store::open()?;
    let repo = Repository::<Deck>::new(&store);

    match action {
        DeckAction::Create { name, description } => {
            let mut deck = Deck::new(name);
            deck.description = description;
            let deck = repo.create(deck)?;
            println!("Deck created: {}", deck.id);
        }
        DeckAction::List => {
            for deck in repo.load()? {
                println!("{}  {} ({} cards)", deck.id, deck.name, deck.cards.len());
            }
        }
        DeckAction::Get { id } => match repo.get(&id)? {
            Some(deck) => println!("{}", serde_json::to_string_pretty(&deck)?),
            None => println!("No deck with id {id}"),
        },
        DeckAction::AddCard { id, front, back } => {
            let mut deck = repo
                .get(&id)?
                .ok_or_else(|| format!("no deck with id {id}"))?;
            let card = Card::new(front, back);
            let card_id = card.id.clone();
            deck.add_card(card);
            repo.update(deck)?;
            println!("Card added: {card_id}");
        }
        DeckAction::RemoveCard { id, card_id } => {
            let mut deck = repo
                .get(&id)?
                .ok_or_else(|| format!("no deck with id {id}"))?;
            if !deck.remove_card(&card_id) {
                return Err(format!("no card with id {card_id}").into());
            }
            repo.update(deck)?;
            println!("Card removed: {card_id}");
        }
        DeckAction::Delete { id } => {
            if repo.delete(&id)? {
                println!("Deck deleted: {id}");
            } else {
                println!("No deck with id {id}");
            }
        }
    }
    Ok(())
}
