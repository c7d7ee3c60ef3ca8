//! End-to-end tests for the scripted conversation.
//!
//! Each test drives a FlowEngine over an in-memory database and the
//! keyword classifier, checking the replies a visitor at the booth
//! would actually see.

use std::sync::Arc;
use std::time::Duration;

use ariana_bot::channels::{IncomingMessage, KeyboardAction, Reply};
use ariana_bot::flow::{FlowEngine, SessionStore};
use ariana_bot::nlu::KeywordClassifier;
use ariana_bot::store::{LibSqlBackend, VisitorStore};

async fn test_engine() -> (FlowEngine, Arc<dyn VisitorStore>) {
    let store: Arc<dyn VisitorStore> = Arc::new(LibSqlBackend::new_memory().await.unwrap());
    store.run_migrations().await.unwrap();
    let engine = FlowEngine::new(
        Arc::clone(&store),
        Arc::new(KeywordClassifier::new()),
        SessionStore::new(Duration::from_secs(300)),
    );
    (engine, store)
}

/// Send one message in the default chat and return the replies.
async fn say(engine: &FlowEngine, text: &str) -> Vec<Reply> {
    say_in(engine, "visitor-1", text).await
}

async fn say_in(engine: &FlowEngine, chat_id: &str, text: &str) -> Vec<Reply> {
    engine
        .handle(&IncomingMessage::new("cli", chat_id, text))
        .await
        .unwrap()
}

fn buttons(labels: &[&str]) -> KeyboardAction {
    KeyboardAction::Show(vec![labels.iter().map(|l| l.to_string()).collect()])
}

#[tokio::test]
async fn informal_english_walk_with_email() {
    let (engine, store) = test_engine().await;

    let replies = say(&engine, "/start").await;
    assert_eq!(replies.len(), 1);
    assert_eq!(
        replies[0].text,
        "Customize me for your patients: \n\nWhat goal would you like me to have?"
    );
    assert_eq!(replies[0].keyboard, buttons(&["chronic", "perform", "mood"]));

    let replies = say(&engine, "chronic").await;
    assert_eq!(
        replies[0].text,
        "Customize me for your patients: \n\nWhat language would you like me to speak?"
    );

    let replies = say(&engine, "en_US").await;
    assert_eq!(
        replies[0].text,
        "Customize me for your patients: \n\nHow would you like me to behave?"
    );

    let replies = say(&engine, "informal").await;
    assert_eq!(
        replies[0].text,
        "I am now fully customized!\n\nDo you want to see me interact as with a patient?"
    );
    assert_eq!(replies[0].keyboard, buttons(&["Continue", "Restart"]));

    let replies = say(&engine, "Continue").await;
    assert_eq!(
        replies[0].text,
        "Hey, have a chocolate if you'd like. I'm Ariana, by the way\n\nYou a fan of chocolate?"
    );
    assert_eq!(replies[0].keyboard, buttons(&["Yes", "No", "Sometimes"]));

    let replies = say(&engine, "Yes").await;
    assert_eq!(
        replies[0].text,
        "I've heard great things about it, but...\n\nDid you know it's high in caffeine and lacks nutritional value?"
    );
    assert_eq!(replies[0].keyboard, buttons(&["Yes", "No", "Whatever"]));

    // The myth gets busted regardless of the answer
    let replies = say(&engine, "No").await;
    assert!(replies[0]
        .text
        .starts_with("Well, no wonder... That’s actually a myth!"));
    assert!(replies[0]
        .text
        .ends_with("Have you found any good food here at ConhIT?"));
    assert_eq!(replies[0].keyboard, buttons(&["Yes", "No", "Don't care"]));

    let replies = say(&engine, "Don't care").await;
    assert!(replies[0].text.starts_with(
        "\"Indifference will be the downfall of mankind, but who cares?\" It can be hard to remember"
    ));
    assert!(replies[0]
        .text
        .ends_with("By the way, where in the health sector do you work?"));
    assert_eq!(
        replies[0].keyboard,
        buttons(&[
            "Hospitals",
            "Insurance",
            "Pharma",
            "Medtech",
            "Healthcare IT",
            "Other"
        ])
    );

    // The share-email question takes typed answers: keyboard goes away
    let replies = say(&engine, "Healthcare IT").await;
    assert!(replies[0]
        .text
        .starts_with("Great! I can help you save costs"));
    assert!(replies[0].text.contains("No spam or newsletters, promise"));
    assert_eq!(replies[0].keyboard, KeyboardAction::Remove);

    let replies = say(&engine, "yes").await;
    assert_eq!(replies[0].text, "Ok, what is your email address?");

    let replies = say(&engine, "eva@example.com").await;
    assert_eq!(replies.len(), 2);
    assert_eq!(replies[0].text, "Thank you!");
    assert_eq!(
        replies[1].text,
        "By the way, did you end up taking a fruit during our conversation?"
    );
    assert_eq!(replies[1].keyboard, buttons(&["Yes", "No", "Why would I?"]));

    // Email was given, so the farewell promises to keep in touch
    let replies = say(&engine, "Yes").await;
    assert_eq!(
        replies[0].text,
        "Go you!\n\nYou know what truly matters in diet? Balance. Which can include a piece of chocolate. Thanks for dropping by, enjoy the rest of ConhIT, and we'll be in touch!"
    );
    assert_eq!(replies[0].keyboard, KeyboardAction::Remove);

    // Conversation over; further messages are ignored
    assert!(say(&engine, "hello?").await.is_empty());

    // One row per recorded choice, all under the same session
    let rows = store.rows_for_chat("visitor-1").await.unwrap();
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0].bot_goal.as_deref(), Some("chronic"));
    assert_eq!(rows[1].language.as_deref(), Some("en_US"));
    assert_eq!(rows[2].bot_character.as_deref(), Some("informal"));
    assert_eq!(rows[3].user_email.as_deref(), Some("eva@example.com"));
    assert_eq!(rows[4].user_health_choice, Some(true));
    assert!(rows.iter().all(|r| r.session_id == rows[0].session_id));
}

#[tokio::test]
async fn formal_german_walk_without_email() {
    let (engine, store) = test_engine().await;
    for text in ["/start", "perform", "de_DE", "formal"] {
        say(&engine, text).await;
    }

    let replies = say(&engine, "Continue").await;
    assert_eq!(
        replies[0].text,
        "Guten Tag, ich bin Ariana. Übrigens gibt es an unserem Stand Kaffee, falls Sie einen möchten.\n\nMögen Sie Kaffee?"
    );
    assert_eq!(replies[0].keyboard, buttons(&["Ja", "Nein", "Manchmal"]));

    let replies = say(&engine, "Nein").await;
    assert_eq!(
        replies[0].text,
        "Das geht wohl einigen Menschen so.\n\nWussten Sie, dass Kaffe den Körper austrocknet und auch sonst keine gesundheitlichen Vorteile bringt?"
    );

    let replies = say(&engine, "Ja").await;
    assert!(replies[0]
        .text
        .starts_with("Nicht ganz... Tatsächlich stimmt das nicht!"));

    let replies = say(&engine, "Ja").await;
    assert!(replies[0].text.starts_with("Wunderbar, das freut mich!"));
    assert!(replies[0].text.ends_with(
        "Eine andere Frage bitte: in welchem Sektor der Gesundheitsbranche arbeiten Sie?"
    ));

    let replies = say(&engine, "Pharma").await;
    assert!(replies[0]
        .text
        .starts_with("Super! Ich könnte Ihnen helfen, Adherence und Compliance zu steigern"));
    assert!(replies[0].text.ends_with(
        "Würden Sie mir Ihre email Adresse geben? Selbstverständlich bekommen Sie dann weder eine Newsletter noch Spam."
    ));
    assert_eq!(replies[0].keyboard, KeyboardAction::Remove);

    // Decline the email
    let replies = say(&engine, "Nein").await;
    assert_eq!(replies.len(), 2);
    assert_eq!(
        replies[0].text,
        "Das verstehe ich natürlich. Trotzdem vielen Dank!"
    );
    assert_eq!(
        replies[1].text,
        "Haben Sie vielleicht die Gelegenheit genutzt und während wir gechattet haben etwas getrunken?"
    );
    assert_eq!(replies[1].keyboard, buttons(&["Ja", "Nein", "Warum?"]));

    // No email given, so the plain farewell
    let replies = say(&engine, "Nein").await;
    assert_eq!(
        replies[0].text,
        "Unser Wasserspender bleibt wo er ist. Sie sind jederzeit herzlich eingeladen.\n\nIch hoffe, Sie wissen jetzt, dass ausreichend trinken dabei helfen kann, geistig fit zu bleiben. Vielen Dank, dass Sie da waren und noch viel Spaß auf der ConhIT!"
    );

    let rows = store.rows_for_chat("visitor-1").await.unwrap();
    assert_eq!(rows.len(), 4);
    assert!(rows.iter().all(|r| r.user_email.is_none()));
    assert_eq!(rows[3].user_health_choice, Some(false));
}

#[tokio::test]
async fn invalid_email_reprompts_until_valid() {
    let (engine, store) = test_engine().await;
    for text in [
        "/start", "chronic", "en_US", "informal", "Continue", "Yes", "Yes", "Yes", "Other",
    ] {
        say(&engine, text).await;
    }

    let replies = say(&engine, "eva_at_example.com").await;
    assert_eq!(replies[0].text, "Ah, could you please try that again?");

    // Still on the same step; a valid address now goes through
    let replies = say(&engine, "eva@example.com").await;
    assert_eq!(replies[0].text, "Thank you!");

    let rows = store.rows_for_chat("visitor-1").await.unwrap();
    let emails: Vec<_> = rows.iter().filter_map(|r| r.user_email.as_deref()).collect();
    assert_eq!(emails, vec!["eva@example.com"]);
}

#[tokio::test]
async fn free_text_falls_back_to_intent_classifier() {
    let (engine, _store) = test_engine().await;
    for text in ["/start", "chronic", "en_US", "informal", "Continue"] {
        say(&engine, text).await;
    }

    // Typed answers get classified and the question is asked again
    let replies = say(&engine, "I adore chocolate so much").await;
    assert_eq!(replies.len(), 2);
    assert_eq!(replies[0].text, "is this your intent: out_of_scope?");
    assert_eq!(replies[1].text, "You a fan of chocolate?");
    assert_eq!(replies[1].keyboard, buttons(&["Yes", "No", "Sometimes"]));

    let replies = say(&engine, "thanks a lot!").await;
    assert_eq!(replies[0].text, "is this your intent: thanks?");

    // Picking a button afterwards resumes the script where it stood
    let replies = say(&engine, "Sometimes").await;
    assert!(replies[0].text.starts_with("That's fair."));
}

#[tokio::test]
async fn cancel_then_start_again() {
    let (engine, _store) = test_engine().await;
    for text in ["/start", "chronic", "en_US", "informal"] {
        say(&engine, text).await;
    }

    let replies = say(&engine, "/cancel").await;
    assert_eq!(
        replies[0].text,
        "OK, thanks for dropping by, enjoy the rest of ConhIT!"
    );

    // The session is gone
    assert!(say(&engine, "Continue").await.is_empty());

    // A new /start opens a fresh conversation
    let replies = say(&engine, "/start").await;
    assert!(replies[0]
        .text
        .ends_with("What goal would you like me to have?"));
}

#[tokio::test]
async fn chats_do_not_share_state() {
    let (engine, store) = test_engine().await;

    // Booth A is already in the patient demo
    for text in ["/start", "chronic", "en_US", "informal", "Continue"] {
        say_in(&engine, "booth-a", text).await;
    }

    // Booth B is still being customized in parallel
    say_in(&engine, "booth-b", "/start").await;
    let replies = say_in(&engine, "booth-b", "mood").await;
    assert!(replies[0]
        .text
        .ends_with("What language would you like me to speak?"));

    // Booth A continues unaffected
    let replies = say_in(&engine, "booth-a", "Yes").await;
    assert!(replies[0]
        .text
        .starts_with("I've heard great things about it, but..."));

    let rows_a = store.rows_for_chat("booth-a").await.unwrap();
    assert_eq!(rows_a.len(), 3);
    let rows_b = store.rows_for_chat("booth-b").await.unwrap();
    assert_eq!(rows_b.len(), 1);
    assert_eq!(rows_b[0].bot_goal.as_deref(), Some("mood"));
}

#[tokio::test]
async fn each_run_gets_its_own_session_id() {
    let (engine, store) = test_engine().await;
    say(&engine, "/start").await;
    say(&engine, "chronic").await;

    say(&engine, "/start").await;
    say(&engine, "perform").await;

    let rows = store.rows_for_chat("visitor-1").await.unwrap();
    assert_eq!(rows.len(), 2);
    assert_ne!(rows[0].session_id, rows[1].session_id);
    assert_eq!(rows[0].bot_goal.as_deref(), Some("chronic"));
    assert_eq!(rows[1].bot_goal.as_deref(), Some("perform"));
}

#[tokio::test]
async fn database_file_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("ariana.db");

    {
        let store: Arc<dyn VisitorStore> =
            Arc::new(LibSqlBackend::new_local(&path).await.unwrap());
        store.run_migrations().await.unwrap();
        let engine = FlowEngine::new(
            Arc::clone(&store),
            Arc::new(KeywordClassifier::new()),
            SessionStore::new(Duration::from_secs(300)),
        );
        say(&engine, "/start").await;
        say(&engine, "mood").await;
    }

    let store: Arc<dyn VisitorStore> = Arc::new(LibSqlBackend::new_local(&path).await.unwrap());
    store.run_migrations().await.unwrap();
    let rows = store.rows_for_chat("visitor-1").await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].bot_goal.as_deref(), Some("mood"));
}
