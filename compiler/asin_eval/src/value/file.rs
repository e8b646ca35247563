//! Open file handles.

use std::cell::{RefCell, RefMut};
use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, Read, Seek, SeekFrom, Write};
use std::rc::Rc;

use crate::errors::{file_not_found, io_error, EvalError, EvalResult};

/// How a file was opened: `r`, `w` or `a`, optionally with `+`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FileMode {
    access: Access,
    update: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Access {
    Read,
    Write,
    Append,
}

impl FileMode {
    pub fn parse(mode: &str) -> Option<Self> {
        let (access, update) = match mode {
            "r" => (Access::Read, false),
            "r+" => (Access::Read, true),
            "w" => (Access::Write, false),
            "w+" => (Access::Write, true),
            "a" => (Access::Append, false),
            "a+" => (Access::Append, true),
            _ => return None,
        };
        Some(FileMode { access, update })
    }

    pub fn as_str(self) -> &'static str {
        match (self.access, self.update) {
            (Access::Read, false) => "r",
            (Access::Read, true) => "r+",
            (Access::Write, false) => "w",
            (Access::Write, true) => "w+",
            (Access::Append, false) => "a",
            (Access::Append, true) => "a+",
        }
    }

    pub fn is_readable(self) -> bool {
        self.update || self.access == Access::Read
    }

    pub fn is_writable(self) -> bool {
        self.update || self.access != Access::Read
    }

    fn open_options(self) -> OpenOptions {
        let mut options = OpenOptions::new();
        options.read(self.is_readable());
        match self.access {
            Access::Read => {
                options.write(self.update);
            }
            Access::Write => {
                options.write(true).create(true).truncate(true);
            }
            Access::Append => {
                options.append(true).create(true);
            }
        }
        options
    }
}

/// An open (or closed) file.
pub struct FileHandle {
    path: String,
    mode: FileMode,
    /// `None` once closed.
    stream: Option<BufReader<File>>,
}

impl FileHandle {
    /// Open `path`; a missing file is `InexistentFileError`, anything else
    /// the host reports is `IOError`.
    pub fn open(path: &str, mode: FileMode) -> EvalResult<Self> {
        let file = mode.open_options().open(path).map_err(|err| {
            if err.kind() == io::ErrorKind::NotFound {
                file_not_found(path)
            } else {
                io_error(&err)
            }
        })?;
        Ok(FileHandle {
            path: path.to_owned(),
            mode,
            stream: Some(BufReader::new(file)),
        })
    }

    fn stream(&mut self) -> EvalResult<&mut BufReader<File>> {
        self.stream
            .as_mut()
            .ok_or_else(|| EvalError::io("I/O operation on closed file"))
    }

    fn readable_stream(&mut self) -> EvalResult<&mut BufReader<File>> {
        let mode = self.mode;
        let stream = self.stream()?;
        if mode.is_readable() {
            Ok(stream)
        } else {
            Err(EvalError::io("File not open for reading"))
        }
    }

    /// Read from the cursor to the end of the file.
    pub fn read_to_end(&mut self) -> EvalResult<String> {
        let mut text = String::new();
        self.readable_stream()?
            .read_to_string(&mut text)
            .map_err(|err| io_error(&err))?;
        Ok(text)
    }

    /// Read one line including its `\n`; empty at end of file.
    pub fn read_line(&mut self) -> EvalResult<String> {
        let mut line = String::new();
        self.readable_stream()?
            .read_line(&mut line)
            .map_err(|err| io_error(&err))?;
        Ok(line)
    }

    pub fn write(&mut self, text: &str) -> EvalResult<()> {
        let mode = self.mode;
        let stream = self.stream()?;
        if !mode.is_writable() {
            return Err(EvalError::io("File not open for writing"));
        }
        // Drop read-ahead so the write lands at the logical cursor.
        stream
            .seek(SeekFrom::Current(0))
            .and_then(|_| stream.get_mut().write_all(text.as_bytes()))
            .map_err(|err| io_error(&err))
    }

    /// Flush and release the file. Closing twice is a no-op.
    pub fn close(&mut self) -> EvalResult<()> {
        match self.stream.take() {
            Some(stream) => stream.into_inner().flush().map_err(|err| io_error(&err)),
            None => Ok(()),
        }
    }
}

/// Shared handle to a [`FileHandle`].
#[derive(Clone)]
pub struct FileRef(Rc<RefCell<FileHandle>>);

impl FileRef {
    pub fn new(handle: FileHandle) -> Self {
        FileRef(Rc::new(RefCell::new(handle)))
    }

    pub fn handle(&self) -> RefMut<'_, FileHandle> {
        self.0.borrow_mut()
    }
}

impl PartialEq for FileRef {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Display for FileRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let handle = self.0.borrow();
        write!(f, "<file \"{}\" {}>", handle.path, handle.mode.as_str())
    }
}

impl fmt::Debug for FileRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FileRef({self})")
    }
}
