//! Word tables for the lexicon scorer.
//!
//! Valences are on the usual [-4, 4] human-rated scale. Keys are lowercase.

pub(crate) const LEXICON: &[(&str, f64)] = &[
    // positive
    ("adorable", 2.2),
    ("agree", 1.5),
    ("amazing", 2.8),
    ("amazed", 2.2),
    ("amused", 1.6),
    ("appreciate", 1.7),
    ("appreciated", 2.3),
    ("awesome", 3.1),
    ("beautiful", 2.9),
    ("best", 3.2),
    ("better", 1.9),
    ("bless", 1.8),
    ("blessed", 2.9),
    ("brave", 2.4),
    ("brilliant", 2.8),
    ("calm", 1.3),
    ("care", 2.2),
    ("charming", 2.8),
    ("cheer", 2.3),
    ("clever", 2.0),
    ("confident", 2.2),
    ("congrats", 2.4),
    ("congratulations", 2.9),
    ("cool", 1.3),
    ("cute", 2.0),
    ("delight", 2.9),
    ("delightful", 2.8),
    ("enjoy", 2.2),
    ("enjoyed", 2.3),
    ("entertaining", 2.2),
    ("excellent", 2.7),
    ("excited", 1.4),
    ("exciting", 2.2),
    ("fabulous", 2.4),
    ("fair", 1.3),
    ("fantastic", 2.6),
    ("favorite", 2.0),
    ("fine", 0.8),
    ("free", 2.3),
    ("friendly", 2.2),
    ("fun", 2.3),
    ("funny", 1.9),
    ("genius", 1.9),
    ("gentle", 1.9),
    ("glad", 2.0),
    ("good", 1.9),
    ("gorgeous", 3.0),
    ("great", 3.1),
    ("happy", 2.7),
    ("haha", 2.0),
    ("hahaha", 2.6),
    ("handsome", 2.2),
    ("heartwarming", 2.1),
    ("helpful", 1.8),
    ("hilarious", 1.7),
    ("honest", 2.3),
    ("hope", 1.9),
    ("hopeful", 1.6),
    ("incredible", 2.2),
    ("inspiring", 2.2),
    ("interesting", 1.7),
    ("joy", 2.8),
    ("kind", 2.4),
    ("like", 2.0),
    ("liked", 1.8),
    ("lmao", 2.0),
    ("lol", 1.8),
    ("love", 3.2),
    ("loved", 2.9),
    ("lovely", 2.8),
    ("loves", 2.7),
    ("loving", 2.9),
    ("lucky", 1.8),
    ("marvelous", 2.9),
    ("nice", 1.8),
    ("ok", 1.2),
    ("okay", 0.9),
    ("perfect", 2.7),
    ("pleasant", 2.3),
    ("pretty", 2.2),
    ("proud", 2.1),
    ("queen", 1.2),
    ("respect", 2.1),
    ("right", 0.6),
    ("romantic", 2.2),
    ("smart", 1.7),
    ("smile", 1.5),
    ("special", 1.7),
    ("strong", 2.3),
    ("stunning", 2.4),
    ("support", 1.7),
    ("sure", 1.3),
    ("sweet", 2.0),
    ("talented", 2.3),
    ("thank", 1.5),
    ("thanks", 1.9),
    ("top", 0.8),
    ("true", 1.8),
    ("trust", 2.3),
    ("valid", 0.8),
    ("win", 2.8),
    ("winner", 2.8),
    ("wonderful", 2.7),
    ("wow", 2.8),
    ("yay", 2.4),
    ("yes", 1.7),
    // negative
    ("abuse", -3.2),
    ("afraid", -2.2),
    ("angry", -2.3),
    ("annoyed", -1.6),
    ("annoying", -1.7),
    ("arrogant", -1.8),
    ("ashamed", -2.1),
    ("awful", -2.0),
    ("awkward", -0.6),
    ("bad", -2.5),
    ("bitter", -1.8),
    ("boring", -1.3),
    ("broke", -1.8),
    ("broken", -2.1),
    ("cheap", -0.7),
    ("cheat", -2.0),
    ("cheater", -2.5),
    ("clown", -1.0),
    ("confused", -1.3),
    ("crap", -1.6),
    ("crazy", -1.4),
    ("creepy", -2.5),
    ("cringe", -1.7),
    ("cruel", -2.8),
    ("cry", -2.1),
    ("damn", -1.7),
    ("dead", -3.3),
    ("desperate", -1.3),
    ("disappointed", -1.9),
    ("disappointing", -2.2),
    ("disgusting", -2.4),
    ("dislike", -1.6),
    ("disrespect", -1.8),
    ("disrespectful", -2.1),
    ("dumb", -2.3),
    ("embarrassing", -1.6),
    ("evil", -3.4),
    ("fail", -2.5),
    ("fake", -2.1),
    ("fear", -2.2),
    ("fool", -1.9),
    ("gross", -2.1),
    ("hate", -2.7),
    ("hated", -3.2),
    ("hates", -1.9),
    ("horrible", -2.5),
    ("hurt", -2.4),
    ("idiot", -2.3),
    ("ignorant", -1.1),
    ("insecure", -1.8),
    ("kill", -3.7),
    ("killed", -3.5),
    ("lame", -1.8),
    ("liar", -2.6),
    ("lie", -1.6),
    ("lies", -1.8),
    ("lonely", -1.5),
    ("lose", -1.7),
    ("loser", -2.4),
    ("lost", -1.3),
    ("lying", -2.4),
    ("mad", -2.2),
    ("mean", -1.5),
    ("mess", -1.5),
    ("messy", -1.5),
    ("miserable", -2.2),
    ("no", -1.2),
    ("pathetic", -2.7),
    ("poor", -2.1),
    ("problem", -1.7),
    ("rude", -2.0),
    ("sad", -2.1),
    ("scared", -1.9),
    ("selfish", -2.1),
    ("shallow", -1.1),
    ("shame", -2.1),
    ("shit", -2.6),
    ("sick", -2.3),
    ("sorry", -0.3),
    ("stupid", -2.4),
    ("suck", -1.9),
    ("sucks", -1.5),
    ("terrible", -2.1),
    ("toxic", -2.2),
    ("trash", -1.6),
    ("ugly", -2.3),
    ("unfair", -2.1),
    ("upset", -1.6),
    ("weird", -0.7),
    ("worse", -2.1),
    ("worst", -3.1),
    ("wrong", -2.1),
    // emoticons, lowercased
    (":)", 2.0),
    (":-)", 1.3),
    (";)", 0.9),
    (":d", 2.3),
    ("<3", 1.9),
    (":(", -1.9),
    (":-(", -1.5),
    (":/", -1.4),
];

/// Intensity nudge applied by booster and dampener words.
pub(crate) const B_INCR: f64 = 0.293;
pub(crate) const B_DECR: f64 = -0.293;

pub(crate) const BOOSTERS: &[(&str, f64)] = &[
    ("absolutely", B_INCR),
    ("amazingly", B_INCR),
    ("completely", B_INCR),
    ("deeply", B_INCR),
    ("especially", B_INCR),
    ("extremely", B_INCR),
    ("fully", B_INCR),
    ("highly", B_INCR),
    ("hella", B_INCR),
    ("incredibly", B_INCR),
    ("most", B_INCR),
    ("more", B_INCR),
    ("really", B_INCR),
    ("so", B_INCR),
    ("super", B_INCR),
    ("too", B_INCR),
    ("totally", B_INCR),
    ("truly", B_INCR),
    ("very", B_INCR),
    ("almost", B_DECR),
    ("barely", B_DECR),
    ("hardly", B_DECR),
    ("kinda", B_DECR),
    ("less", B_DECR),
    ("little", B_DECR),
    ("marginally", B_DECR),
    ("slightly", B_DECR),
    ("somewhat", B_DECR),
    ("sorta", B_DECR),
];

pub(crate) const NEGATIONS: &[&str] = &[
    "aint", "aren't", "arent", "can't", "cannot", "cant", "couldn't", "couldnt", "didn't",
    "didnt", "doesn't", "doesnt", "don't", "dont", "hadn't", "hadnt", "hasn't", "hasnt",
    "haven't", "havent", "isn't", "isnt", "neither", "never", "none", "nope", "nor", "not",
    "nothing", "nowhere", "shouldn't", "shouldnt", "wasn't", "wasnt", "weren't", "werent",
    "without", "won't", "wont", "wouldn't", "wouldnt",
];
