use super::model::{Memory, TrackEntry, Texts};

pub fn default_tracks() -> Vec<TrackEntry> {
    [
        ("Veyyira Cheyyi Veyyira", "Panja", 8),
        ("Oh Priya Priya", "Ishq", 10),
        ("Avunu Nijam", "Athadu", 12),
        ("Singari", "Dude", 16),
    ]
    .into_iter()
    .map(|(title, subtitle, song)| TrackEntry {
        title: title.to_string(),
        subtitle: subtitle.to_string(),
        source: format!("https://www.soundhelix.com/examples/mp3/SoundHelix-Song-{song}.mp3"),
    })
    .collect()
}

pub fn default_memories() -> Vec<Memory> {
    [
        ("The way you look at me", "photo-1518199266791-5375a83190b7"),
        ("Pure happiness", "photo-1522673607200-164883eecd0c"),
        ("Dreaming together", "photo-1516589174184-c685266e430c"),
        ("Every heartbeat for you", "photo-1518895949257-7621c3c786d7"),
        ("Forever & Always", "photo-1531747118685-ca8fa6e3225c"),
        ("Our beautiful journey", "photo-1529634806980-85c3dd6d34ac"),
    ]
    .into_iter()
    .map(|(caption, photo)| Memory {
        caption: caption.to_string(),
        image: format!("https://images.unsplash.com/{photo}?auto=format&fit=crop&q=80&w=600"),
    })
    .collect()
}

pub fn default_reasons() -> Vec<String> {
    [
        "The way your eyes sparkle when you're truly excited about something.",
        "Your kindness that touches every person and animal you meet.",
        "How you always know exactly how to make me laugh when I'm stressed.",
        "The peaceful, home-like feeling I get just by being in your presence.",
        "Your incredible passion and dedication to everything you love.",
        "The adorable way you scrunch your nose when you're thinking hard.",
        "How you are my best friend, my soulmate, and my partner in crime.",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

impl Default for Texts {
    fn default() -> Self {
        Self {
            invitation_title: "An Official Invitation".to_string(),
            invitation_from: "From your boyfriend".to_string(),
            question: "Will you be my Valentine?".to_string(),
            accepted: "Good choice babe, now you are stuck with me forever.".to_string(),
            change_mind_hint: "If you want to change your mind, press n for NO.".to_string(),
            final_words: "Too late cutie. You already said yes, which means you're mine now. Deal with it. ;)"
                .to_string(),
            note_title: "A Secret Note For You".to_string(),
            note_subtitle: "Only for your eyes...".to_string(),
            note_salutation: "My Dearest,".to_string(),
            note_body: "Every single day with you feels like a beautiful dream I never want to wake up from. \
                        You make my world infinitely brighter, my heart fuller, and my life complete. \
                        Thank you for being my constant light.\n\n\
                        I love you more than words could ever say."
                .to_string(),
            note_closing: "Forever Yours.".to_string(),
            gallery_title: "Our Favorite Memories".to_string(),
            gallery_subtitle: "Press enter on the camera to snap back into our best moments".to_string(),
            reasons_title: "Things I Love About You".to_string(),
            reasons_subtitle: "Every petal represents a unique part of why you're my everything.".to_string(),
            playlist_title: "Our Playlist".to_string(),
            footer: "Made with love for you".to_string(),
        }
    }
}
