//! Go standard library knowledge table
//! Compiled-in data behind the default symbol registry

use crate::registry::{PackageEntry, Snippet, SymbolEntry};

/// Go keywords
pub const KEYWORDS: &[&str] = &[
    "break", "case", "chan", "const", "continue", "default", "defer", "else",
    "fallthrough", "for", "func", "go", "goto", "if", "import", "interface",
    "map", "package", "range", "return", "select", "struct", "switch", "type", "var",
];

/// Go predeclared types
pub const BUILTIN_TYPES: &[&str] = &[
    "bool", "byte", "complex64", "complex128", "error", "float32", "float64",
    "int", "int8", "int16", "int32", "int64", "rune", "string",
    "uint", "uint8", "uint16", "uint32", "uint64", "uintptr",
];

pub fn build_packages() -> Vec<PackageEntry> {
    vec![
        PackageEntry::new("fmt", build_fmt()),
        PackageEntry::new("strings", build_strings()),
        PackageEntry::new("strconv", build_strconv()),
        PackageEntry::new("time", build_time()),
        PackageEntry::new("math", build_math()),
        PackageEntry::new("os", build_os()),
    ]
}

fn build_fmt() -> Vec<SymbolEntry> {
    vec![
        SymbolEntry::function("Print", "Print(${1:a})", "func Print(a ...interface{}) (n int, err error)"),
        SymbolEntry::function("Printf", "Printf(\"${1:%v}\", ${2:a})", "func Printf(format string, a ...interface{}) (n int, err error)"),
        SymbolEntry::function("Println", "Println(${1:a})", "func Println(a ...interface{}) (n int, err error)"),
        SymbolEntry::function("Sprint", "Sprint(${1:a})", "func Sprint(a ...interface{}) string"),
        SymbolEntry::function("Sprintf", "Sprintf(\"${1:%v}\", ${2:a})", "func Sprintf(format string, a ...interface{}) string"),
        SymbolEntry::function("Sprintln", "Sprintln(${1:a})", "func Sprintln(a ...interface{}) string"),
        SymbolEntry::function("Fprint", "Fprint(${1:w}, ${2:a})", "func Fprint(w io.Writer, a ...interface{}) (n int, err error)"),
        SymbolEntry::function("Fprintf", "Fprintf(${1:w}, \"${2:%v}\", ${3:a})", "func Fprintf(w io.Writer, format string, a ...interface{}) (n int, err error)"),
        SymbolEntry::function("Fprintln", "Fprintln(${1:w}, ${2:a})", "func Fprintln(w io.Writer, a ...interface{}) (n int, err error)"),
        SymbolEntry::function("Scan", "Scan(&${1:a})", "func Scan(a ...interface{}) (n int, err error)"),
        SymbolEntry::function("Scanf", "Scanf(\"${1:%v}\", &${2:a})", "func Scanf(format string, a ...interface{}) (n int, err error)"),
        SymbolEntry::function("Scanln", "Scanln(&${1:a})", "func Scanln(a ...interface{}) (n int, err error)"),
        SymbolEntry::function("Errorf", "Errorf(\"${1:error}: %v\", ${2:err})", "func Errorf(format string, a ...interface{}) error"),
    ]
}

fn build_strings() -> Vec<SymbolEntry> {
    vec![
        SymbolEntry::function("Contains", "Contains(${1:s}, ${2:substr})", "func Contains(s, substr string) bool"),
        SymbolEntry::function("ContainsAny", "ContainsAny(${1:s}, ${2:chars})", "func ContainsAny(s, chars string) bool"),
        SymbolEntry::function("Count", "Count(${1:s}, ${2:substr})", "func Count(s, substr string) int"),
        SymbolEntry::function("HasPrefix", "HasPrefix(${1:s}, ${2:prefix})", "func HasPrefix(s, prefix string) bool"),
        SymbolEntry::function("HasSuffix", "HasSuffix(${1:s}, ${2:suffix})", "func HasSuffix(s, suffix string) bool"),
        SymbolEntry::function("Index", "Index(${1:s}, ${2:substr})", "func Index(s, substr string) int"),
        SymbolEntry::function("Join", "Join(${1:elems}, \"${2:sep}\")", "func Join(elems []string, sep string) string"),
        SymbolEntry::function("Replace", "Replace(${1:s}, \"${2:old}\", \"${3:new}\", ${4:-1})", "func Replace(s, old, new string, n int) string"),
        SymbolEntry::function("ReplaceAll", "ReplaceAll(${1:s}, \"${2:old}\", \"${3:new}\")", "func ReplaceAll(s, old, new string) string"),
        SymbolEntry::function("Split", "Split(${1:s}, \"${2:sep}\")", "func Split(s, sep string) []string"),
        SymbolEntry::function("ToLower", "ToLower(${1:s})", "func ToLower(s string) string"),
        SymbolEntry::function("ToUpper", "ToUpper(${1:s})", "func ToUpper(s string) string"),
        SymbolEntry::function("Trim", "Trim(${1:s}, \"${2:cutset}\")", "func Trim(s, cutset string) string"),
        SymbolEntry::function("TrimSpace", "TrimSpace(${1:s})", "func TrimSpace(s string) string"),
    ]
}

fn build_strconv() -> Vec<SymbolEntry> {
    vec![
        SymbolEntry::function("Atoi", "Atoi(${1:s})", "func Atoi(s string) (int, error)"),
        SymbolEntry::function("Itoa", "Itoa(${1:i})", "func Itoa(i int) string"),
        SymbolEntry::function("ParseBool", "ParseBool(${1:str})", "func ParseBool(str string) (bool, error)"),
        SymbolEntry::function("ParseFloat", "ParseFloat(${1:s}, ${2:64})", "func ParseFloat(s string, bitSize int) (float64, error)"),
        SymbolEntry::function("ParseInt", "ParseInt(${1:s}, ${2:10}, ${3:64})", "func ParseInt(s string, base int, bitSize int) (int64, error)"),
        SymbolEntry::function("FormatBool", "FormatBool(${1:b})", "func FormatBool(b bool) string"),
        SymbolEntry::function("FormatFloat", "FormatFloat(${1:f}, ${2:'f'}, ${3:-1}, ${4:64})", "func FormatFloat(f float64, fmt byte, prec, bitSize int) string"),
        SymbolEntry::function("FormatInt", "FormatInt(${1:i}, ${2:10})", "func FormatInt(i int64, base int) string"),
    ]
}

fn build_time() -> Vec<SymbolEntry> {
    vec![
        SymbolEntry::function("Now", "Now()", "func Now() Time"),
        SymbolEntry::function("Sleep", "Sleep(${1:1} * time.Second)", "func Sleep(d Duration)"),
        SymbolEntry::function("Since", "Since(${1:t})", "func Since(t Time) Duration"),
        SymbolEntry::function("Until", "Until(${1:t})", "func Until(t Time) Duration"),
        SymbolEntry::function("Parse", "Parse(\"${1:2006-01-02}\", \"${2:2024-01-01}\")", "func Parse(layout, value string) (Time, error)"),
        SymbolEntry::function("NewTicker", "NewTicker(${1:1} * time.Second)", "func NewTicker(d Duration) *Ticker"),
        SymbolEntry::function("NewTimer", "NewTimer(${1:1} * time.Second)", "func NewTimer(d Duration) *Timer"),
        SymbolEntry::function("After", "After(${1:1} * time.Second)", "func After(d Duration) <-chan Time"),
        // === CONSTANTS ===
        SymbolEntry::constant("Second", "Second", "const Second Duration = 1000000000"),
        SymbolEntry::constant("Minute", "Minute", "const Minute = 60 * Second"),
        SymbolEntry::constant("Hour", "Hour", "const Hour = 60 * Minute"),
    ]
}

fn build_math() -> Vec<SymbolEntry> {
    vec![
        SymbolEntry::function("Abs", "Abs(${1:x})", "func Abs(x float64) float64"),
        SymbolEntry::function("Ceil", "Ceil(${1:x})", "func Ceil(x float64) float64"),
        SymbolEntry::function("Floor", "Floor(${1:x})", "func Floor(x float64) float64"),
        SymbolEntry::function("Max", "Max(${1:x}, ${2:y})", "func Max(x, y float64) float64"),
        SymbolEntry::function("Min", "Min(${1:x}, ${2:y})", "func Min(x, y float64) float64"),
        SymbolEntry::function("Pow", "Pow(${1:x}, ${2:y})", "func Pow(x, y float64) float64"),
        SymbolEntry::function("Round", "Round(${1:x})", "func Round(x float64) float64"),
        SymbolEntry::function("Sqrt", "Sqrt(${1:x})", "func Sqrt(x float64) float64"),
    ]
}

fn build_os() -> Vec<SymbolEntry> {
    vec![
        SymbolEntry::function("Exit", "Exit(${1:0})", "func Exit(code int)"),
        SymbolEntry::function("Getenv", "Getenv(\"${1:key}\")", "func Getenv(key string) string"),
        SymbolEntry::function("Setenv", "Setenv(\"${1:key}\", \"${2:value}\")", "func Setenv(key, value string) error"),
        SymbolEntry::function("Open", "Open(\"${1:name}\")", "func Open(name string) (*File, error)"),
        SymbolEntry::function("Create", "Create(\"${1:name}\")", "func Create(name string) (*File, error)"),
        SymbolEntry::function("Remove", "Remove(\"${1:name}\")", "func Remove(name string) error"),
        SymbolEntry::function("Mkdir", "Mkdir(\"${1:name}\", ${2:0755})", "func Mkdir(name string, perm FileMode) error"),
        // === VARIABLES ===
        SymbolEntry::variable("Args", "Args", "var Args []string"),
        SymbolEntry::variable("Stdout", "Stdout", "var Stdout = NewFile(uintptr(syscall.Stdout), \"/dev/stdout\")"),
        SymbolEntry::variable("Stderr", "Stderr", "var Stderr = NewFile(uintptr(syscall.Stderr), \"/dev/stderr\")"),
        SymbolEntry::variable("Stdin", "Stdin", "var Stdin = NewFile(uintptr(syscall.Stdin), \"/dev/stdin\")"),
    ]
}

pub fn build_snippets() -> Vec<Snippet> {
    vec![
        Snippet::new("main", "func main() {\n\t${1}\n}", "Main function"),
        Snippet::new(
            "for",
            "for ${1:i} := ${2:0}; ${1:i} < ${3:10}; ${1:i}++ {\n\t${4}\n}",
            "For loop",
        ),
        Snippet::new(
            "forrange",
            "for ${1:index}, ${2:value} := range ${3:slice} {\n\t${4}\n}",
            "For range loop",
        ),
        Snippet::new("if", "if ${1:condition} {\n\t${2}\n}", "If statement"),
        Snippet::new("iferr", "if err != nil {\n\t${1:return err}\n}", "Error check"),
        Snippet::new(
            "func",
            "func ${1:name}(${2:params}) ${3:returnType} {\n\t${4}\n}",
            "Function declaration",
        ),
        Snippet::new(
            "struct",
            "type ${1:Name} struct {\n\t${2:field} ${3:type}\n}",
            "Struct declaration",
        ),
        Snippet::new(
            "interface",
            "type ${1:Name} interface {\n\t${2:Method}() ${3:returnType}\n}",
            "Interface declaration",
        ),
        Snippet::new(
            "switch",
            "switch ${1:expression} {\ncase ${2:value}:\n\t${3}\ndefault:\n\t${4}\n}",
            "Switch statement",
        ),
        Snippet::new(
            "select",
            "select {\ncase ${1:channel} <- ${2:value}:\n\t${3}\ndefault:\n\t${4}\n}",
            "Select statement",
        ),
        Snippet::new("goroutine", "go func() {\n\t${1}\n}()", "Goroutine"),
        Snippet::new("defer", "defer ${1:func()}", "Defer statement"),
        Snippet::new("make", "make(${1:[]type}, ${2:0})", "Make slice/map/channel"),
        Snippet::new("append", "append(${1:slice}, ${2:element})", "Append to slice"),
    ]
}
