//! Built-in question tables, one per grade

use super::Question;

/// (skill, subject)
type Skill = (&'static str, &'static str);

const ADDITION: Skill = ("addition", "math");
const SUBTRACTION: Skill = ("subtraction", "math");
const COUNTING: Skill = ("counting", "math");
const MULTIPLICATION: Skill = ("multiplication", "math");
const DIVISION: Skill = ("division", "math");
const PLACE_VALUE: Skill = ("place value", "math");
const FRACTIONS: Skill = ("fractions", "math");
const DECIMALS: Skill = ("decimals", "math");
const EXPRESSIONS: Skill = ("expressions", "math");
const FACTORS: Skill = ("factors", "math");
const MONEY: Skill = ("money", "math");
const TIME: Skill = ("time", "math");
const MEASUREMENT: Skill = ("measurement", "math");
const GEOMETRY: Skill = ("geometry", "math");
const AREA: Skill = ("area and perimeter", "math");
const VOLUME: Skill = ("volume", "math");
const COORDINATES: Skill = ("coordinates", "math");
const PHONICS: Skill = ("phonics", "reading");
const SPELLING: Skill = ("spelling", "reading");
const VOCABULARY: Skill = ("vocabulary", "reading");
const GRAMMAR: Skill = ("grammar", "reading");
const FIGURATIVE: Skill = ("figurative language", "reading");
const SCIENCE: Skill = ("science", "science");
const GEOGRAPHY: Skill = ("geography", "social studies");

struct Entry {
    text: &'static str,
    options: [&'static str; 4],
    correct: usize,
    difficulty: u8,
    skill: Skill,
}

macro_rules! q {
    ($text:expr, [$a:expr, $b:expr, $c:expr, $d:expr], $correct:expr, $difficulty:expr, $skill:expr) => {
        Entry {
            text: $text,
            options: [$a, $b, $c, $d],
            correct: $correct,
            difficulty: $difficulty,
            skill: $skill,
        }
    };
}

const GRADE_1: &[Entry] = &[
    q!("3 + 4 = ?", ["6", "7", "8", "5"], 1, 1, ADDITION),
    q!("5 + 2 = ?", ["7", "6", "8", "9"], 0, 1, ADDITION),
    q!("8 + 1 = ?", ["10", "7", "9", "8"], 2, 1, ADDITION),
    q!("6 + 6 = ?", ["11", "12", "13", "10"], 1, 2, ADDITION),
    q!("9 + 4 = ?", ["12", "14", "15", "13"], 3, 2, ADDITION),
    q!("7 + 8 = ?", ["15", "14", "16", "13"], 0, 3, ADDITION),
    q!("10 + 5 = ?", ["105", "15", "5", "16"], 1, 1, ADDITION),
    q!("2 + 9 = ?", ["10", "12", "11", "7"], 2, 2, ADDITION),
    q!("9 - 3 = ?", ["5", "6", "7", "12"], 1, 1, SUBTRACTION),
    q!("7 - 2 = ?", ["5", "4", "9", "6"], 0, 1, SUBTRACTION),
    q!("10 - 4 = ?", ["7", "5", "14", "6"], 3, 1, SUBTRACTION),
    q!("12 - 5 = ?", ["6", "8", "7", "17"], 2, 2, SUBTRACTION),
    q!("15 - 7 = ?", ["8", "9", "7", "22"], 0, 3, SUBTRACTION),
    q!("8 - 8 = ?", ["8", "1", "16", "0"], 3, 1, SUBTRACTION),
    q!("14 - 6 = ?", ["9", "8", "7", "20"], 1, 3, SUBTRACTION),
    q!("11 - 3 = ?", ["7", "9", "8", "14"], 2, 2, SUBTRACTION),
    q!("Which number comes after 19?", ["18", "20", "21", "10"], 1, 1, COUNTING),
    q!("Which number is the biggest?", ["12", "21", "19", "9"], 1, 2, COUNTING),
    q!("Which number is the smallest?", ["14", "41", "4", "40"], 2, 1, COUNTING),
    q!("How many tens are in 30?", ["3", "30", "13", "0"], 0, 2, COUNTING),
    q!("Count by 2s: 2, 4, 6, __", ["7", "10", "8", "9"], 2, 2, COUNTING),
    q!("Count by 5s: 5, 10, 15, __", ["16", "25", "30", "20"], 3, 2, COUNTING),
    q!("Count by 10s: 10, 20, 30, __", ["31", "40", "50", "35"], 1, 1, COUNTING),
    q!("How many sides does a triangle have?", ["3", "4", "5", "2"], 0, 1, GEOMETRY),
    q!("How many corners does a square have?", ["3", "5", "4", "6"], 2, 1, GEOMETRY),
    q!("Which shape is round?", ["Square", "Circle", "Triangle", "Rectangle"], 1, 1, GEOMETRY),
    q!("Which shape has 4 equal sides?", ["Rectangle", "Triangle", "Circle", "Square"], 3, 2, GEOMETRY),
    q!("A can of soup looks like which shape?", ["Cube", "Cone", "Cylinder", "Sphere"], 2, 3, GEOMETRY),
    q!("Which word rhymes with 'cat'?", ["Dog", "Hat", "Cup", "Sun"], 1, 1, PHONICS),
    q!("Which word rhymes with 'sun'?", ["Run", "Sit", "Sat", "Moon"], 0, 1, PHONICS),
    q!("Which word starts with the 'b' sound?", ["Dog", "Pig", "Ball", "Cat"], 2, 1, PHONICS),
    q!("Which word is spelled correctly?", ["Frend", "Freind", "Frind", "Friend"], 3, 3, SPELLING),
    q!("Which word is spelled correctly?", ["Becuz", "Because", "Becaus", "Becose"], 1, 3, SPELLING),
    q!("What is the opposite of 'hot'?", ["Warm", "Cold", "Wet", "Big"], 1, 1, VOCABULARY),
    q!("What is the opposite of 'up'?", ["Down", "Top", "Over", "Out"], 0, 1, VOCABULARY),
    q!("Which animal can fly?", ["Fish", "Dog", "Bird", "Cow"], 2, 1, SCIENCE),
    q!("What do plants need to grow?", ["Candy", "Sunlight", "Toys", "Shoes"], 1, 1, SCIENCE),
    q!("Which animal lives in water?", ["Lion", "Horse", "Rabbit", "Fish"], 3, 1, SCIENCE),
    q!("How many legs does a spider have?", ["6", "8", "4", "10"], 1, 2, SCIENCE),
    q!("Which season comes after winter?", ["Summer", "Fall", "Spring", "Monday"], 2, 2, SCIENCE),
];

const GRADE_2: &[Entry] = &[
    q!("24 + 13 = ?", ["37", "36", "47", "11"], 0, 1, ADDITION),
    q!("45 + 28 = ?", ["63", "73", "72", "83"], 1, 2, ADDITION),
    q!("56 + 37 = ?", ["83", "92", "93", "94"], 2, 3, ADDITION),
    q!("38 + 40 = ?", ["78", "68", "88", "79"], 0, 1, ADDITION),
    q!("19 + 19 = ?", ["28", "39", "37", "38"], 3, 2, ADDITION),
    q!("67 + 25 = ?", ["82", "92", "93", "91"], 1, 3, ADDITION),
    q!("50 - 20 = ?", ["20", "70", "30", "40"], 2, 1, SUBTRACTION),
    q!("85 - 42 = ?", ["43", "47", "33", "127"], 0, 2, SUBTRACTION),
    q!("73 - 28 = ?", ["55", "45", "44", "51"], 1, 3, SUBTRACTION),
    q!("100 - 35 = ?", ["75", "55", "65", "135"], 2, 2, SUBTRACTION),
    q!("62 - 17 = ?", ["55", "35", "46", "45"], 3, 3, SUBTRACTION),
    q!("90 - 45 = ?", ["45", "55", "35", "50"], 0, 2, SUBTRACTION),
    q!("In 47, what is the value of the 4?", ["4", "40", "400", "47"], 1, 1, PLACE_VALUE),
    q!("Which number has 6 tens and 3 ones?", ["36", "603", "63", "9"], 2, 1, PLACE_VALUE),
    q!("What is 300 + 50 + 2?", ["352", "3502", "325", "532"], 0, 2, PLACE_VALUE),
    q!("Which number is greater than 589?", ["598", "579", "589", "508"], 0, 2, PLACE_VALUE),
    q!("Round 38 to the nearest ten.", ["30", "35", "40", "38"], 2, 3, PLACE_VALUE),
    q!("How many cents are in a quarter?", ["5", "10", "25", "50"], 2, 1, MONEY),
    q!("Two dimes and a nickel make how many cents?", ["25", "20", "15", "30"], 0, 2, MONEY),
    q!("How many cents are in one dollar?", ["10", "50", "1000", "100"], 3, 1, MONEY),
    q!("Three quarters make how many cents?", ["65", "75", "85", "30"], 1, 2, MONEY),
    q!("How many minutes are in an hour?", ["100", "30", "60", "24"], 2, 1, TIME),
    q!(
        "The short hand is on 3 and the long hand is on 12. What time is it?",
        ["12:03", "3:00", "3:12", "12:15"],
        1,
        2,
        TIME
    ),
    q!("How many hours are in a day?", ["12", "60", "24", "7"], 2, 1, TIME),
    q!("What time is 30 minutes after 4:00?", ["4:30", "5:00", "4:15", "3:30"], 0, 2, TIME),
    q!("Which tool measures length?", ["Clock", "Scale", "Ruler", "Cup"], 2, 1, MEASUREMENT),
    q!("How many inches are in a foot?", ["10", "12", "3", "100"], 1, 2, MEASUREMENT),
    q!("Which is the longest?", ["1 inch", "1 foot", "1 yard", "1 centimeter"], 2, 3, MEASUREMENT),
    q!("Which word is a noun?", ["Run", "Happy", "Dog", "Quickly"], 2, 1, GRAMMAR),
    q!("Which word is a verb?", ["Jump", "Blue", "Table", "Soft"], 0, 1, GRAMMAR),
    q!("What is the plural of 'child'?", ["Childs", "Childes", "Children", "Childrens"], 2, 2, GRAMMAR),
    q!("What is the plural of 'box'?", ["Boxs", "Boxes", "Boxies", "Box"], 1, 2, GRAMMAR),
    q!(
        "Which sentence is written correctly?",
        ["she is my friend.", "She is my friend.", "she Is my friend.", "She is my friend"],
        1,
        3,
        GRAMMAR
    ),
    q!("Which word means 'very big'?", ["Tiny", "Huge", "Soft", "Quick"], 1, 1, VOCABULARY),
    q!("What is a synonym for 'happy'?", ["Sad", "Angry", "Glad", "Tired"], 2, 2, VOCABULARY),
    q!("What is the opposite of 'early'?", ["Late", "Soon", "First", "Fast"], 0, 1, VOCABULARY),
    q!("What does a caterpillar turn into?", ["Beetle", "Butterfly", "Spider", "Worm"], 1, 1, SCIENCE),
    q!("Water turns into ice when it is...", ["Heated", "Frozen", "Stirred", "Poured"], 1, 2, SCIENCE),
    q!("Which is a living thing?", ["Rock", "Tree", "Chair", "Water"], 1, 1, SCIENCE),
    q!(
        "What do we call animals that eat only plants?",
        ["Carnivores", "Omnivores", "Herbivores", "Predators"],
        2,
        3,
        SCIENCE
    ),
];

const GRADE_3: &[Entry] = &[
    q!("3 × 4 = ?", ["7", "12", "14", "10"], 1, 1, MULTIPLICATION),
    q!("6 × 7 = ?", ["42", "36", "48", "13"], 0, 2, MULTIPLICATION),
    q!("8 × 9 = ?", ["63", "81", "72", "64"], 2, 3, MULTIPLICATION),
    q!("5 × 6 = ?", ["11", "25", "35", "30"], 3, 1, MULTIPLICATION),
    q!("7 × 7 = ?", ["49", "42", "56", "14"], 0, 2, MULTIPLICATION),
    q!("9 × 4 = ?", ["32", "36", "45", "13"], 1, 2, MULTIPLICATION),
    q!("6 × 8 = ?", ["54", "42", "48", "56"], 2, 3, MULTIPLICATION),
    q!("10 × 7 = ?", ["17", "700", "77", "70"], 3, 1, MULTIPLICATION),
    q!("12 ÷ 3 = ?", ["4", "3", "9", "6"], 0, 1, DIVISION),
    q!("20 ÷ 5 = ?", ["5", "4", "15", "25"], 1, 1, DIVISION),
    q!("36 ÷ 6 = ?", ["5", "7", "6", "30"], 2, 2, DIVISION),
    q!("56 ÷ 8 = ?", ["6", "8", "9", "7"], 3, 3, DIVISION),
    q!("45 ÷ 9 = ?", ["5", "4", "6", "36"], 0, 2, DIVISION),
    q!(
        "24 cookies are shared equally by 4 kids. How many does each kid get?",
        ["8", "6", "20", "4"],
        1,
        2,
        DIVISION
    ),
    q!("Which fraction shows one half?", ["1/3", "2/1", "1/2", "1/4"], 2, 1, FRACTIONS),
    q!("Which fraction is the biggest?", ["1/8", "1/2", "1/4", "1/6"], 1, 2, FRACTIONS),
    q!(
        "A pizza is cut into 4 equal slices. You eat 3. What fraction did you eat?",
        ["3/4", "1/4", "4/3", "3/1"],
        0,
        2,
        FRACTIONS
    ),
    q!("Which fraction is equal to 2/4?", ["2/3", "1/4", "1/2", "4/2"], 2, 3, FRACTIONS),
    q!("What is 1/3 of 12?", ["3", "6", "9", "4"], 3, 3, FRACTIONS),
    q!("345 + 278 = ?", ["613", "623", "523", "633"], 1, 2, ADDITION),
    q!("500 - 123 = ?", ["377", "387", "423", "477"], 0, 3, SUBTRACTION),
    q!("456 + 200 = ?", ["476", "656", "556", "666"], 1, 1, ADDITION),
    q!("802 - 405 = ?", ["407", "497", "397", "403"], 2, 3, SUBTRACTION),
    q!("Round 467 to the nearest hundred.", ["400", "470", "460", "500"], 3, 2, PLACE_VALUE),
    q!(
        "A rectangle is 5 units long and 3 units wide. What is its area?",
        ["8", "16", "15", "30"],
        2,
        2,
        AREA
    ),
    q!(
        "What is the perimeter of a square with sides of 4 cm?",
        ["16 cm", "8 cm", "12 cm", "20 cm"],
        0,
        2,
        AREA
    ),
    q!("A rectangle is 6 m by 2 m. What is its perimeter?", ["12 m", "8 m", "14 m", "16 m"], 3, 3, AREA),
    q!("How many square units cover a 4 by 4 square?", ["8", "12", "16", "20"], 2, 1, AREA),
    q!("Which word is an adjective?", ["Quickly", "Sing", "Bright", "Table"], 2, 1, GRAMMAR),
    q!("Which word is an adverb?", ["Slowly", "Slow", "Snail", "Slower"], 0, 2, GRAMMAR),
    q!("What is the past tense of 'run'?", ["Runned", "Ran", "Running", "Runs"], 1, 2, GRAMMAR),
    q!(
        "Which sentence is a question?",
        ["I like apples.", "Close the door.", "What time is it?", "The sky is blue."],
        2,
        1,
        GRAMMAR
    ),
    q!("Which word is a compound word?", ["Sunflower", "Running", "Happy", "Beautiful"], 0, 2, GRAMMAR),
    q!("What does 'enormous' mean?", ["Tiny", "Very large", "Very fast", "Noisy"], 1, 2, VOCABULARY),
    q!("Which prefix means 'not'?", ["Re-", "Pre-", "Un-", "Sub-"], 2, 3, VOCABULARY),
    q!(
        "What gas do plants take in from the air?",
        ["Oxygen", "Carbon dioxide", "Helium", "Nitrogen"],
        1,
        2,
        SCIENCE
    ),
    q!(
        "What force pulls objects toward the Earth?",
        ["Magnetism", "Friction", "Gravity", "Wind"],
        2,
        1,
        SCIENCE
    ),
    q!("Which planet is closest to the Sun?", ["Venus", "Earth", "Mars", "Mercury"], 3, 2, SCIENCE),
    q!(
        "What are the three states of matter?",
        ["Solid, liquid, gas", "Hot, warm, cold", "Rock, water, air", "Big, medium, small"],
        0,
        2,
        SCIENCE
    ),
    q!(
        "In a frog's life cycle, what comes right after the egg?",
        ["Frog", "Tadpole", "Froglet", "Adult"],
        1,
        3,
        SCIENCE
    ),
];

const GRADE_4: &[Entry] = &[
    q!("23 × 4 = ?", ["82", "92", "96", "27"], 1, 1, MULTIPLICATION),
    q!("15 × 12 = ?", ["180", "170", "150", "190"], 0, 2, MULTIPLICATION),
    q!("34 × 25 = ?", ["750", "800", "850", "950"], 2, 3, MULTIPLICATION),
    q!("120 × 3 = ?", ["320", "360", "363", "123"], 1, 1, MULTIPLICATION),
    q!("48 × 11 = ?", ["488", "518", "528", "538"], 2, 3, MULTIPLICATION),
    q!("144 ÷ 12 = ?", ["11", "12", "13", "14"], 1, 2, DIVISION),
    q!("96 ÷ 4 = ?", ["24", "22", "26", "23"], 0, 2, DIVISION),
    q!("125 ÷ 5 = ?", ["20", "30", "35", "25"], 3, 2, DIVISION),
    q!("What is the remainder of 29 ÷ 4?", ["1", "2", "3", "0"], 0, 3, DIVISION),
    q!("630 ÷ 9 = ?", ["7", "60", "70", "72"], 2, 3, DIVISION),
    q!("1/4 + 2/4 = ?", ["3/8", "3/4", "2/4", "1/2"], 1, 1, FRACTIONS),
    q!("5/6 - 2/6 = ?", ["3/6", "7/6", "3/12", "2/6"], 0, 1, FRACTIONS),
    q!("Which fraction is equivalent to 3/5?", ["5/3", "6/10", "3/10", "6/5"], 1, 2, FRACTIONS),
    q!("3 × 1/4 = ?", ["3/12", "1/12", "3/4", "4/3"], 2, 3, FRACTIONS),
    q!("Which is greater: 2/3 or 3/5?", ["3/5", "They are equal", "2/3", "Cannot tell"], 2, 3, FRACTIONS),
    q!("What is 0.5 as a fraction?", ["1/5", "1/2", "5/1", "1/50"], 1, 1, DECIMALS),
    q!("Which decimal is the largest?", ["0.09", "0.9", "0.19", "0.099"], 1, 2, DECIMALS),
    q!("0.3 + 0.45 = ?", ["0.48", "0.75", "0.7", "0.85"], 1, 2, DECIMALS),
    q!("How do you write 7/100 as a decimal?", ["0.7", "7.0", "0.07", "0.007"], 2, 2, DECIMALS),
    q!("1.2 + 2.9 = ?", ["3.11", "4.1", "3.1", "4.11"], 1, 3, DECIMALS),
    q!("How many degrees are in a right angle?", ["45", "90", "180", "360"], 1, 1, GEOMETRY),
    q!(
        "An angle smaller than a right angle is called...",
        ["Acute", "Obtuse", "Straight", "Reflex"],
        0,
        2,
        GEOMETRY
    ),
    q!("How many degrees are in a straight angle?", ["90", "360", "100", "180"], 3, 2, GEOMETRY),
    q!(
        "Lines that never meet are called...",
        ["Perpendicular", "Intersecting", "Parallel", "Curved"],
        2,
        2,
        GEOMETRY
    ),
    q!("Which is a factor of 24?", ["5", "7", "8", "9"], 2, 1, FACTORS),
    q!("Which number is prime?", ["9", "15", "21", "13"], 3, 2, FACTORS),
    q!(
        "What is the first multiple of 7 that is greater than 50?",
        ["54", "56", "57", "63"],
        1,
        3,
        FACTORS
    ),
    q!("Which number is a multiple of both 3 and 4?", ["12", "14", "16", "18"], 0, 2, FACTORS),
    q!(
        "Which sentence uses 'their' correctly?",
        ["Their going home.", "Put it over their.", "Their dog is friendly.", "Their is a cat."],
        2,
        2,
        GRAMMAR
    ),
    q!("Which word is a pronoun?", ["Mountain", "They", "Quickly", "Green"], 1, 1, GRAMMAR),
    q!(
        "Which is a complete sentence?",
        ["Running to the store.", "The big red ball.", "Because it rained.", "The bird sang a song."],
        3,
        2,
        GRAMMAR
    ),
    q!(
        "What is the subject of 'The cat slept on the mat'?",
        ["Cat", "Slept", "Mat", "On"],
        0,
        3,
        GRAMMAR
    ),
    q!("What does 'reluctant' mean?", ["Eager", "Unwilling", "Angry", "Sleepy"], 1, 3, VOCABULARY),
    q!("What is an antonym of 'ancient'?", ["Old", "Modern", "Broken", "Famous"], 1, 2, VOCABULARY),
    q!(
        "Which word has a suffix that means 'full of'?",
        ["Careless", "Careful", "Redo", "Unkind"],
        1,
        2,
        VOCABULARY
    ),
    q!("Which organ pumps blood through the body?", ["Lungs", "Brain", "Heart", "Stomach"], 2, 1, SCIENCE),
    q!(
        "What kind of energy does the Sun give us?",
        ["Light and heat", "Sound", "Electricity only", "Magnetic"],
        0,
        1,
        SCIENCE
    ),
    q!(
        "What is it called when water vapor turns into liquid?",
        ["Evaporation", "Condensation", "Melting", "Freezing"],
        1,
        2,
        SCIENCE
    ),
    q!(
        "Which type of rock forms from cooled lava?",
        ["Sedimentary", "Metamorphic", "Igneous", "Limestone"],
        2,
        3,
        SCIENCE
    ),
    q!(
        "What causes day and night on Earth?",
        ["Earth orbiting the Sun", "The Moon's shadow", "Earth spinning on its axis", "Clouds"],
        2,
        2,
        SCIENCE
    ),
];

const GRADE_5: &[Entry] = &[
    q!("2/3 + 1/6 = ?", ["3/9", "5/6", "1/2", "3/6"], 1, 2, FRACTIONS),
    q!("3/4 - 1/3 = ?", ["2/1", "1/12", "5/12", "2/7"], 2, 3, FRACTIONS),
    q!("1/2 × 3/5 = ?", ["3/10", "4/7", "3/7", "1/10"], 0, 2, FRACTIONS),
    q!("What is 2 1/2 as an improper fraction?", ["3/2", "5/2", "7/2", "4/2"], 1, 2, FRACTIONS),
    q!("6 ÷ 1/2 = ?", ["3", "12", "6", "1/12"], 1, 3, FRACTIONS),
    q!("Simplify 12/18.", ["6/9", "3/4", "2/3", "4/6"], 2, 2, FRACTIONS),
    q!("3.6 × 10 = ?", ["0.36", "36", "360", "3.60"], 1, 1, DECIMALS),
    q!("4.5 + 3.75 = ?", ["7.25", "8.2", "8.25", "7.8"], 2, 2, DECIMALS),
    q!("10 - 6.4 = ?", ["4.6", "3.6", "4.4", "3.4"], 1, 2, DECIMALS),
    q!("0.6 × 0.5 = ?", ["3.0", "0.03", "0.3", "0.11"], 2, 3, DECIMALS),
    q!("Round 7.38 to the nearest tenth.", ["7.3", "7.4", "7.0", "7.38"], 1, 2, DECIMALS),
    q!("4.2 ÷ 2 = ?", ["2.1", "2.2", "1.2", "8.4"], 0, 1, DECIMALS),
    q!("What is the value of 2 + 3 × 4?", ["20", "14", "24", "9"], 1, 2, EXPRESSIONS),
    q!("(8 - 3) × 2 = ?", ["2", "13", "10", "16"], 2, 1, EXPRESSIONS),
    q!("What is 5²?", ["10", "25", "7", "52"], 1, 1, EXPRESSIONS),
    q!("What is 10³?", ["30", "100", "1000", "10000"], 2, 2, EXPRESSIONS),
    q!("If n + 7 = 15, what is n?", ["22", "8", "7", "9"], 1, 2, EXPRESSIONS),
    q!("What is the volume of a box that is 2 × 3 × 4 units?", ["9", "24", "20", "14"], 1, 2, VOLUME),
    q!(
        "What is the volume of a cube with 3 cm edges?",
        ["9 cm³", "18 cm³", "27 cm³", "12 cm³"],
        2,
        2,
        VOLUME
    ),
    q!("How many milliliters are in 1 liter?", ["10", "100", "1000", "10000"], 2, 1, MEASUREMENT),
    q!("How many centimeters are in 2.5 meters?", ["25", "250", "2500", "205"], 1, 2, MEASUREMENT),
    q!(
        "The point (3, 5) is 3 units along which axis?",
        ["y-axis", "x-axis", "z-axis", "Neither"],
        1,
        2,
        COORDINATES
    ),
    q!("Which ordered pair is the origin?", ["(1, 1)", "(0, 1)", "(0, 0)", "(1, 0)"], 2, 1, COORDINATES),
    q!("1,000 × 45 = ?", ["4,500", "45,000", "450,000", "450"], 1, 1, PLACE_VALUE),
    q!("In 3.472, which digit is in the hundredths place?", ["3", "4", "7", "2"], 2, 2, PLACE_VALUE),
    q!("Which number is 10 times greater than 0.8?", ["0.08", "80", "8", "0.88"], 2, 3, PLACE_VALUE),
    q!(
        "Which sentence uses a comma correctly?",
        ["I like, apples.", "After lunch, we played outside.", "We, went home.", "The dog, barked."],
        1,
        2,
        GRAMMAR
    ),
    q!("Which word is a conjunction?", ["Because", "Blue", "Jump", "Under"], 0, 2, GRAMMAR),
    q!(
        "Which sentence is in the future tense?",
        ["I walked home.", "I walk home.", "I will walk home.", "I was walking home."],
        2,
        1,
        GRAMMAR
    ),
    q!(
        "Which is an example of a simile?",
        ["The wind howled.", "She is as quick as a fox.", "Time is money.", "Boom went the drum."],
        1,
        2,
        FIGURATIVE
    ),
    q!("What does 'benevolent' mean?", ["Kind", "Cruel", "Lazy", "Loud"], 0, 3, VOCABULARY),
    q!("Which word is a synonym for 'abundant'?", ["Scarce", "Plentiful", "Empty", "Tiny"], 1, 3, VOCABULARY),
    q!(
        "What do the roots of a plant mainly do?",
        ["Make seeds", "Absorb water", "Catch sunlight", "Attract bees"],
        1,
        1,
        SCIENCE
    ),
    q!("Which planet is known as the Red Planet?", ["Jupiter", "Venus", "Mars", "Saturn"], 2, 1, SCIENCE),
    q!(
        "What process do plants use to make food from sunlight?",
        ["Respiration", "Photosynthesis", "Digestion", "Pollination"],
        1,
        2,
        SCIENCE
    ),
    q!(
        "Salt fully dissolved in water makes a...",
        ["Solution", "Solid", "Compound", "Element"],
        0,
        3,
        SCIENCE
    ),
    q!("Which gas do humans need to breathe?", ["Carbon dioxide", "Oxygen", "Hydrogen", "Helium"], 1, 1, SCIENCE),
    q!(
        "How long does it take Earth to orbit the Sun?",
        ["One day", "One month", "One year", "One week"],
        2,
        2,
        SCIENCE
    ),
    q!("Which ocean is the largest?", ["Atlantic", "Indian", "Arctic", "Pacific"], 3, 2, GEOGRAPHY),
    q!(
        "What is the capital of the United States?",
        ["New York", "Washington, D.C.", "Boston", "Chicago"],
        1,
        1,
        GEOGRAPHY
    ),
];

const GRADES: [(&str, &[Entry]); 5] = [
    ("1", GRADE_1),
    ("2", GRADE_2),
    ("3", GRADE_3),
    ("4", GRADE_4),
    ("5", GRADE_5),
];

pub(super) fn build() -> Vec<(String, Vec<Question>)> {
    GRADES
        .iter()
        .enumerate()
        .map(|(g, (label, entries))| {
            let base = (g as u32 + 1) * 1000;
            let questions = entries
                .iter()
                .enumerate()
                .map(|(i, e)| Question {
                    id: base + i as u32,
                    text: e.text.to_string(),
                    options: e.options.iter().map(|o| o.to_string()).collect(),
                    correct_answer: e.correct,
                    difficulty: e.difficulty,
                    skill: e.skill.0.to_string(),
                    grade: label.to_string(),
                    subject: Some(e.skill.1.to_string()),
                    damage: None,
                })
                .collect();
            (label.to_string(), questions)
        })
        .collect()
}
