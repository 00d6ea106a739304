/// Returns a clone of the element at `index`, or [`None`] if it's out of bounds.
pub fn nth<T: Clone>(index: usize, input: &[T]) -> Option<T> {
    input.get(index).cloned()
}

/// Returns the index of the first element equal to `needle`.
///
/// The needle can be of any type comparable with the elements, so a `&str` can be found in a slice
/// of [`String`]s.
///
/// # Examples
/// ```
/// # use utility_lib::collections::find;
/// let words = [String::from("one"), String::from("two")];
/// assert_eq!(find("two", &words), Some(1));
/// ```
pub fn find<T, U>(needle: &U, haystack: &[T]) -> Option<usize>
where
    T: PartialEq<U>,
    U: ?Sized,
{
    haystack.iter().position(|item| item == needle)
}

/// Returns the elements that satisfy `predicate`, in their original order.
pub fn filter<T: Clone, P: FnMut(&T) -> bool>(mut predicate: P, input: &[T]) -> Vec<T> {
    input.iter().filter(|item| predicate(*item)).cloned().collect()
}

/// Applies `func` to every element, preserving length and order.
pub fn fmap<T, U, F: FnMut(&T) -> U>(func: F, input: &[T]) -> Vec<U> {
    input.iter().map(func).collect()
}

/// Alias of [`fmap`].
pub fn map<T, U, F: FnMut(&T) -> U>(func: F, input: &[T]) -> Vec<U> {
    fmap(func, input)
}

/// Applies `func` to every element and keeps only the values it returns, in order.
pub fn flat_map<T, U, F: FnMut(&T) -> Option<U>>(func: F, input: &[T]) -> Vec<U> {
    input.iter().filter_map(func).collect()
}

/// Returns the longest prefix of `input` whose elements all satisfy `predicate`. Elements after
/// the first failure are never looked at.
pub fn take_while<T: Clone, P: FnMut(&T) -> bool>(mut predicate: P, input: &[T]) -> Vec<T> {
    input.iter().take_while(|item| predicate(*item)).cloned().collect()
}

/// Left fold: `acc = func(acc, element)` for every element in order.
///
/// # Examples
/// ```
/// # use utility_lib::collections::fold;
/// assert_eq!(fold(0, |acc, i| acc + i, &[1, 2, 3, 4]), 10);
/// ```
pub fn fold<T, U, F: FnMut(U, &T) -> U>(init: U, func: F, input: &[T]) -> U {
    input.iter().fold(init, func)
}

/// Like [`fold`], but stops as soon as `func` returns [`None`] and returns the last accumulator
/// that it did produce.
///
/// # Examples
/// ```
/// # use utility_lib::collections::try_fold;
/// let sum = try_fold(0_u8, |acc, i| acc.checked_add(*i), &[100, 100, 100]);
/// assert_eq!(sum, 200);
/// ```
pub fn try_fold<T, U: Clone, F: FnMut(U, &T) -> Option<U>>(init: U, mut func: F, input: &[T]) -> U {
    let mut acc = init;
    for item in input {
        match func(acc.clone(), item) {
            Some(next) => acc = next,
            None => break,
        }
    }
    acc
}

/// Flattens one level of nesting. Works for anything iterable, so a slice of [`Option`]s drops the
/// empty ones and a slice of [`Vec`]s concatenates them.
///
/// # Examples
/// ```
/// # use utility_lib::collections::flatten;
/// assert_eq!(flatten(&[Some(1), None, Some(3)]), [1, 3]);
/// assert_eq!(flatten(&[vec![1, 2], vec![], vec![3]]), [1, 2, 3]);
/// ```
pub fn flatten<C: Clone + IntoIterator>(input: &[C]) -> Vec<C::Item> {
    input.iter().cloned().flatten().collect()
}

/// Extends `dest` with clones of every element of `src`, in order.
pub fn append<T: Clone>(dest: &mut Vec<T>, src: &[T]) {
    dest.extend_from_slice(src);
}

/// Returns a new Vec holding `first` followed by `second`.
///
/// The second slice can hold any type that converts into the first's element type.
pub fn concat<T: Clone, U: Clone + Into<T>>(first: &[T], second: &[U]) -> Vec<T> {
    let mut output = Vec::with_capacity(first.len() + second.len());
    output.extend_from_slice(first);
    output.extend(second.iter().cloned().map(Into::into));
    output
}

/// Removes every element that fails `predicate`, keeping the rest in order.
pub fn retain<T, P: FnMut(&T) -> bool>(predicate: P, input: &mut Vec<T>) {
    input.retain(predicate);
}

/// Returns the argument directly after the first occurrence of `flag`, or [`None`] if the flag is
/// missing or is the last argument.
///
/// # Examples
/// ```
/// # use utility_lib::collections::flag_value;
/// let args = ["--source-dir", "src/"].map(String::from);
/// assert_eq!(flag_value("--source-dir", &args).as_deref(), Some("src/"));
/// assert_eq!(flag_value("src/", &args), None);
/// ```
pub fn flag_value<S: AsRef<str>>(flag: &str, args: &[S]) -> Option<String> {
    let index = args.iter().position(|arg| arg.as_ref() == flag)?;
    args.get(index + 1).map(|value| value.as_ref().to_owned())
}
