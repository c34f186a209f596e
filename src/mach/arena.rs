use super::{Native, UserFunc, MAX_ARGS};
use crate::error;
use crate::lang::{Error, Operator, Span, Word};

type Result<T> = std::result::Result<T, Error>;

/// Width of one value-stack slot.
pub const WORD: usize = std::mem::size_of::<i64>();

/// Width of one symbol record in the low region.
pub const SYMBOL_SIZE: usize = 4 * WORD;

/// Width of one user function descriptor: the argument count,
/// then a (source, offset, length) triple for each name and the body.
pub const FUNC_SIZE: usize = WORD * (1 + 3 * (MAX_ARGS + 1));

/// Where the bytes of a [`Str`] live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Src {
    Static(&'static str),
    Arena,
    Text(usize),
}

/// Borrowed-by-position slice. It owns nothing; the region named by
/// `src` owns the bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Str {
    pub src: Src,
    pub at: usize,
    pub len: usize,
}

impl Str {
    pub const EMPTY: Str = Str {
        src: Src::Arena,
        at: 0,
        len: 0,
    };

    pub fn from_static(s: &'static str) -> Str {
        Str {
            src: Src::Static(s),
            at: 0,
            len: s.len(),
        }
    }

    pub fn text(id: usize, len: usize) -> Str {
        Str {
            src: Src::Text(id),
            at: 0,
            len,
        }
    }

    pub fn new(src: Src, span: Span) -> Str {
        Str {
            src,
            at: span.start,
            len: span.end - span.start,
        }
    }

    pub fn end(&self) -> usize {
        self.at + self.len
    }
}

#[derive(Clone, Copy)]
pub enum Tag {
    Var,
    Operator(Operator),
    Word(Word),
    Native { func: Native, arity: u8 },
    Func { nargs: u8 },
}

impl Tag {
    pub fn arity(&self) -> Option<usize> {
        match self {
            Tag::Native { arity, .. } => Some(*arity as usize),
            Tag::Func { nargs } => Some(*nargs as usize),
            _ => None,
        }
    }
}

impl std::fmt::Debug for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tag::Var => write!(f, "Var"),
            Tag::Operator(op) => write!(f, "Operator({:?})", op),
            Tag::Word(word) => write!(f, "Word({:?})", word),
            Tag::Native { arity, .. } => write!(f, "Native({})", arity),
            Tag::Func { nargs } => write!(f, "Func({})", nargs),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Symbol {
    pub name: Str,
    pub tag: Tag,
    pub value: i64,
}

/// ## Dual-direction bump arena
///
/// One fixed byte budget. Symbols take records from the low end
/// (`symptr` grows up). Stack words and durable allocations take from
/// the high end (`valptr` grows down). Nothing is allowed to cross.
#[derive(Debug)]
pub struct Arena {
    size: usize,
    symbols: Vec<Symbol>,
    stack: Vec<i64>,
    durable: Vec<u8>,
    funcs: Vec<UserFunc>,
    reserved: usize,
}

fn word_aligned(len: usize) -> usize {
    (len + WORD - 1) / WORD * WORD
}

impl Arena {
    pub fn new(size: usize) -> Arena {
        Arena {
            size,
            symbols: vec![],
            stack: vec![],
            durable: vec![],
            funcs: vec![],
            reserved: 0,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn symptr(&self) -> usize {
        self.symbols.len() * SYMBOL_SIZE
    }

    pub fn valptr(&self) -> usize {
        self.size - self.stack.len() * WORD - self.reserved
    }

    pub fn free(&self) -> usize {
        self.valptr() - self.symptr()
    }

    fn reserve(&self, len: usize) -> Result<()> {
        if len > self.free() {
            Err(error!(OutOfMemory))
        } else {
            Ok(())
        }
    }

    pub fn alloc_symbol(&mut self, name: Str, tag: Tag, value: i64) -> Result<usize> {
        self.reserve(SYMBOL_SIZE)?;
        self.symbols.push(Symbol { name, tag, value });
        Ok(self.symbols.len() - 1)
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn symbol(&self, index: usize) -> Option<&Symbol> {
        self.symbols.get(index)
    }

    pub fn symbol_mut(&mut self, index: usize) -> Option<&mut Symbol> {
        self.symbols.get_mut(index)
    }

    pub fn checkpoint(&self) -> usize {
        self.symbols.len()
    }

    pub fn rollback(&mut self, checkpoint: usize) {
        self.symbols.truncate(checkpoint);
    }

    pub fn push(&mut self, word: i64) -> Result<()> {
        self.reserve(WORD)?;
        self.stack.push(word);
        Ok(())
    }

    /// Popping an empty stack yields zero.
    pub fn pop(&mut self) -> i64 {
        self.stack.pop().unwrap_or(0)
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Drops stack words above `depth`.
    pub fn unwind(&mut self, depth: usize) {
        self.stack.truncate(depth);
    }

    /// Takes `len` bytes, word aligned, from the high end. There is no
    /// matching release; the bytes stay taken until the arena is dropped.
    pub fn stack_alloc(&mut self, len: usize) -> Result<usize> {
        let len = word_aligned(len);
        self.reserve(len)?;
        self.reserved += len;
        Ok(self.valptr())
    }

    pub fn alloc_bytes(&mut self, bytes: &[u8]) -> Result<Str> {
        self.stack_alloc(bytes.len())?;
        let at = self.durable.len();
        self.durable.extend_from_slice(bytes);
        Ok(Str {
            src: Src::Arena,
            at,
            len: bytes.len(),
        })
    }

    pub fn durable(&self) -> &[u8] {
        &self.durable
    }

    pub fn alloc_func(&mut self, func: UserFunc) -> Result<usize> {
        self.stack_alloc(FUNC_SIZE)?;
        self.funcs.push(func);
        Ok(self.funcs.len() - 1)
    }

    pub fn func(&self, index: usize) -> Option<&UserFunc> {
        self.funcs.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursors_meet() {
        let mut arena = Arena::new(SYMBOL_SIZE + WORD);
        assert_eq!(arena.symptr(), 0);
        assert_eq!(arena.valptr(), SYMBOL_SIZE + WORD);
        arena.alloc_symbol(Str::EMPTY, Tag::Var, 1).unwrap();
        arena.push(7).unwrap();
        assert_eq!(arena.free(), 0);
        assert!(arena.push(8).is_err());
        assert!(arena.alloc_symbol(Str::EMPTY, Tag::Var, 2).is_err());
        assert_eq!(arena.symptr(), SYMBOL_SIZE);
        assert_eq!(arena.valptr(), SYMBOL_SIZE);
        assert_eq!(arena.pop(), 7);
    }

    #[test]
    fn test_pop_underflow_is_zero() {
        let mut arena = Arena::new(64);
        assert_eq!(arena.pop(), 0);
        arena.push(-3).unwrap();
        assert_eq!(arena.pop(), -3);
        assert_eq!(arena.pop(), 0);
        assert_eq!(arena.valptr(), 64);
    }

    #[test]
    fn test_unwind_returns_stack_space() {
        let mut arena = Arena::new(64);
        arena.push(1).unwrap();
        let depth = arena.depth();
        arena.push(2).unwrap();
        arena.push(3).unwrap();
        arena.unwind(depth);
        assert_eq!(arena.valptr(), 64 - WORD);
        assert_eq!(arena.pop(), 1);
    }

    #[test]
    fn test_stack_alloc_is_aligned_and_kept() {
        let mut arena = Arena::new(64);
        assert_eq!(arena.stack_alloc(3).unwrap(), 64 - WORD);
        let s = arena.alloc_bytes(b"hello world").unwrap();
        assert_eq!(arena.valptr(), 64 - WORD - 2 * WORD);
        assert_eq!(&arena.durable()[s.at..s.end()], b"hello world");
        arena.push(1).unwrap();
        arena.pop();
        assert_eq!(arena.valptr(), 64 - 3 * WORD);
    }

    #[test]
    fn test_failed_alloc_leaves_cursors() {
        let mut arena = Arena::new(16);
        assert!(arena.stack_alloc(17).is_err());
        assert_eq!(arena.valptr(), 16);
        assert!(arena.alloc_symbol(Str::EMPTY, Tag::Var, 0).is_err());
        assert_eq!(arena.symptr(), 0);
    }

    #[test]
    fn test_rollback_discards_newer_symbols() {
        let mut arena = Arena::new(1024);
        arena.alloc_symbol(Str::from_static("a"), Tag::Var, 1).unwrap();
        let mark = arena.checkpoint();
        arena.alloc_symbol(Str::from_static("a"), Tag::Var, 2).unwrap();
        assert_eq!(arena.symbols().len(), 2);
        arena.rollback(mark);
        assert_eq!(arena.symbols().len(), 1);
        assert_eq!(arena.symbol(0).map(|s| s.value), Some(1));
    }
}
