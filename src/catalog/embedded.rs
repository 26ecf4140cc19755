//! Puzzle content compiled into the binary
//!
//! Each entry is `(word, hint)`. Multi-line hints keep their trailing newline.

/// Animal riddles
pub const ANIMALS: &[(&str, &str)] = &[
    (
        "bat",
        "I sleep by day and fly at night, but I have no feathers to aid my flight.",
    ),
    ("lion", "A king without a crown."),
    (
        "shark",
        "Some people are scared of this creature,\n\
         Because it can have a big bite.\n\
         So be careful out in the ocean,\n\
         One of its kind is a Great White.\n",
    ),
    (
        "turtle",
        "With four oars it swims but it is always at home.\n\
         Its back is like armor, tougher than chrome.\n",
    ),
    (
        "elephant",
        "I’m an animal you might love But I’m too big to be your pet\n\
         I have an extremely long trunk.\n\
         And it’s said I never forget.\n",
    ),
    ("kangaroo", "It jumps when it walks and sits when it stands."),
];

/// Fruit and vegetable riddles
pub const FRUITS: &[(&str, &str)] = &[
    ("strawberry", "I am a fruit with seeds on the outside."),
    (
        "broccoli",
        "I'm a green veggie that looks like a tiny tree.",
    ),
    (
        "potato",
        "A skin have I, more eyes than one.\n\
         I can be very nice when I am done.\n",
    ),
    ("carrot", "It is orange and sounds like a parrot."),
    (
        "cherry",
        "I wear a red coat and have a stone in my throat.",
    ),
    ("blueberry", "This fruit is always sad."),
];

/// Nature riddles
pub const NATURE: &[(&str, &str)] = &[
    (
        "dandelion",
        "First you see me in the grass dressed in yellow gay; next I am in dainty white, then I fly away.",
    ),
    ("tree", "It has lots of bark, but no bite?"),
    (
        "astra",
        "Beautiful flowers\n\
         Bloomed in the garden,\n\
         Glittered colors\n\
         And autumn is coming.\n",
    ),
    (
        "wave",
        "The moon is my father. The sea is my mother.\n\
         I have a million brothers. I die when I reach land.\n",
    ),
    (
        "air",
        "I touch your face, I'm in your words,\n\
         I'm lack of space and beloved by birds.\n",
    ),
    (
        "asteroid",
        "Large as a mountain, small as a pea,\n\
         Endlessly swimming in a waterless sea.\n",
    ),
];
